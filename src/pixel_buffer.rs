use core::ops::{Deref, DerefMut};

use crate::color::{BLACK, Rgb};

/// Shared frame for all zones
///
/// `N` is the number of physical pixels. Effects write into it by index and
/// the output driver reads it once per tick. Writes are visible immediately,
/// there is no back buffer.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> PixelBuffer<N> {
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Color at `index`, or `None` past the end
    pub fn get(&self, index: u16) -> Option<Rgb> {
        self.pixels.get(usize::from(index)).copied()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for PixelBuffer<N> {
    type Target = [Rgb];

    fn deref(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl<const N: usize> DerefMut for PixelBuffer<N> {
    fn deref_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }
}
