//! Configuration intake
//!
//! Handle used by the transport to read and replace zone settings. It only
//! borrows the zones, so it can live in an interrupt callback while the
//! engine keeps ticking the same zones.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::error::ZoneError;
use crate::settings::EffectSettings;
use crate::store::SettingsStore;
use crate::wire::{MAX_FIELD_LEN, SettingField, SettingsPatch, encode_field};
use crate::zone::Zone;

/// Access to zone settings by zone id
///
/// Zone ids are indices into the zone slice.
#[derive(Clone, Copy)]
pub struct Controller<'a, const P: usize> {
    zones: &'a [Zone<P>],
}

impl<'a, const P: usize> Controller<'a, P> {
    pub const fn new(zones: &'a [Zone<P>]) -> Self {
        Self { zones }
    }

    pub const fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Get the zone by id
    pub fn zone(&self, zone_id: usize) -> Result<&'a Zone<P>, ZoneError> {
        self.zones
            .get(zone_id)
            .ok_or(ZoneError::UnknownZone(zone_id))
    }

    /// Replace the zone's effect with one built from `settings`
    pub fn apply(&self, zone_id: usize, settings: EffectSettings) -> Result<(), ZoneError> {
        let zone = self.zone(zone_id)?;
        zone.set_effect(settings);

        #[cfg(feature = "esp32-log")]
        println!(
            "zones: zone {} now runs {}",
            zone_id,
            settings.kind.as_str()
        );

        Ok(())
    }

    /// Settings the zone is currently running
    pub fn current(&self, zone_id: usize) -> Result<EffectSettings, ZoneError> {
        Ok(self.zone(zone_id)?.settings())
    }

    /// Merge a single-field write into the current settings and apply them
    ///
    /// Returns the merged settings.
    pub fn write_field(
        &self,
        zone_id: usize,
        patch: SettingsPatch,
    ) -> Result<EffectSettings, ZoneError> {
        let mut settings = self.current(zone_id)?;
        patch.apply_to(&mut settings);
        self.apply(zone_id, settings)?;
        Ok(settings)
    }

    /// Encode a single field of the current settings
    pub fn read_field(
        &self,
        zone_id: usize,
        field: SettingField,
    ) -> Result<Vec<u8, MAX_FIELD_LEN>, ZoneError> {
        let settings = self.current(zone_id)?;
        Ok(encode_field(&settings, field))
    }

    /// Start every zone from stored settings
    ///
    /// Zones without stored settings are switched off.
    pub fn restore<S: SettingsStore + ?Sized>(&self, store: &mut S) {
        for (zone_id, zone) in self.zones.iter().enumerate() {
            let settings = store.load(zone_id);

            #[cfg(feature = "esp32-log")]
            if settings.is_none() {
                println!("zones: no stored settings for zone {}, switching off", zone_id);
            }

            zone.set_effect(settings.unwrap_or_default());
        }
    }
}
