mod tests {
    use pixel_zones::color::rgb_from_u32;
    use pixel_zones::{
        Controller, EffectKind, EffectSettings, SettingField, SettingsPatch, Zone, ZoneError,
    };

    fn zones() -> [Zone<4>; 2] {
        [
            Zone::new(&[0, 1], 4, 10).unwrap(),
            Zone::new(&[2, 3], 4, 10).unwrap(),
        ]
    }

    #[test]
    fn test_apply_and_current() {
        let zones = zones();
        let controller = Controller::new(&zones);
        let settings = EffectSettings::gradient(0x102030, 0x405060, 1.5);

        controller.apply(1, settings).unwrap();
        assert_eq!(controller.current(1), Ok(settings));
        assert_eq!(controller.current(0), Ok(EffectSettings::off()));
    }

    #[test]
    fn test_unknown_zone() {
        let zones = zones();
        let controller = Controller::new(&zones);
        assert_eq!(
            controller.apply(2, EffectSettings::off()),
            Err(ZoneError::UnknownZone(2))
        );
        assert_eq!(controller.current(7), Err(ZoneError::UnknownZone(7)));
    }

    #[test]
    fn test_write_field_merges_with_current() {
        let zones = zones();
        let controller = Controller::new(&zones);
        controller
            .apply(0, EffectSettings::constant(0xFF0000))
            .unwrap();

        let patch = SettingsPatch::decode(SettingField::Kind, &[3]).unwrap();
        let merged = controller.write_field(0, patch).unwrap();
        assert_eq!(merged.kind, EffectKind::Gradient);
        assert_eq!(merged.color1, rgb_from_u32(0xFF0000));

        let patch = SettingsPatch::decode(SettingField::Period, &[2, 128]).unwrap();
        controller.write_field(0, patch).unwrap();
        let current = controller.current(0).unwrap();
        assert_eq!(current.kind, EffectKind::Gradient);
        assert!((current.period - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_read_field() {
        let zones = zones();
        let controller = Controller::new(&zones);
        controller
            .apply(1, EffectSettings::random(0xA1B2C3, 1.25, 42))
            .unwrap();

        assert_eq!(
            controller.read_field(1, SettingField::Kind).unwrap().as_slice(),
            &[4]
        );
        assert_eq!(
            controller.read_field(1, SettingField::Period).unwrap().as_slice(),
            &[1, 64]
        );
        assert_eq!(
            controller
                .read_field(1, SettingField::Activation)
                .unwrap()
                .as_slice(),
            &[42]
        );
        assert_eq!(
            controller.read_field(1, SettingField::Color1).unwrap().as_slice(),
            &[0xA1, 0xB2, 0xC3]
        );
    }

    #[test]
    fn test_restore_from_store() {
        let zones = zones();
        let controller = Controller::new(&zones);
        let mut store = [Some(EffectSettings::constant(0x00FF00)), None];

        controller.restore(&mut store);
        assert_eq!(controller.current(0), Ok(EffectSettings::constant(0x00FF00)));
        assert_eq!(controller.current(1), Ok(EffectSettings::off()));
        assert!(zones.iter().all(Zone::is_active));
    }
}
