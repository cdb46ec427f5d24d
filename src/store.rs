use crate::settings::EffectSettings;

/// Source of per-zone settings at boot
///
/// The storage format is up to the implementor. Returning `None` starts the
/// zone switched off.
pub trait SettingsStore {
    fn load(&mut self, zone: usize) -> Option<EffectSettings>;
}

impl SettingsStore for [EffectSettings] {
    fn load(&mut self, zone: usize) -> Option<EffectSettings> {
        self.get(zone).copied()
    }
}

impl<const N: usize> SettingsStore for [EffectSettings; N] {
    fn load(&mut self, zone: usize) -> Option<EffectSettings> {
        self.get(zone).copied()
    }
}

impl<const N: usize> SettingsStore for [Option<EffectSettings>; N] {
    fn load(&mut self, zone: usize) -> Option<EffectSettings> {
        self.get(zone).copied().flatten()
    }
}
