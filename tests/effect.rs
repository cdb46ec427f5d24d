mod tests {
    use pixel_zones::color::{BLACK, Rgb, rgb_from_u32, rgb_to_u32};
    use pixel_zones::effect::{
        Direction, Effect, EffectSlot, FlickerEffect, GradientEffect, activation_threshold,
    };
    use pixel_zones::{EffectKind, EffectSettings};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn always_zero() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_off_ignores_color() {
        let settings = EffectSettings {
            kind: EffectKind::Off,
            color1: RED,
            ..EffectSettings::off()
        };
        let mut effect = EffectSlot::<4>::build(&settings, 10);
        let mut frame = [WHITE; 4];
        let mut rng = always_zero();
        for _ in 0..5 {
            effect.update(&[0, 2], &mut frame, &mut rng);
            assert_eq!(frame, [BLACK, WHITE, BLACK, WHITE]);
        }
    }

    #[test]
    fn test_const_writes_only_owned_pixels() {
        let mut effect = EffectSlot::<4>::build(&EffectSettings::constant(0x00FF00), 10);
        let mut frame = [BLACK; 8];
        let mut rng = always_zero();
        for _ in 0..5 {
            effect.update(&[5], &mut frame, &mut rng);
            assert_eq!(rgb_to_u32(frame[5]), 0x00FF00);
            assert!(frame.iter().enumerate().all(|(i, c)| i == 5 || *c == BLACK));
        }
    }

    #[test]
    fn test_gradient_ping_pong() {
        let mut effect = GradientEffect::new(RED, BLACK, 1.0, 10).unwrap();
        assert_eq!(effect.ticks_per_half(), 10);
        let mut frame = [BLACK; 2];
        let mut rng = always_zero();

        let mut reds = Vec::new();
        for _ in 0..20 {
            effect.update(&[0, 1], &mut frame, &mut rng);
            assert_eq!(frame[0], frame[1]);
            reds.push(frame[0].r);
        }

        // First frame is one step away from the first color
        assert_eq!(reds[0], 229);
        assert_eq!(reds[9], 0);
        assert_eq!(reds[19], 255);
        assert!(reds[..10].windows(2).all(|w| w[1] <= w[0]));
        assert!(reds[9..].windows(2).all(|w| w[1] >= w[0]));

        assert_eq!(effect.direction(), Direction::TowardEnd);
        assert_eq!(effect.tick(), 1);
    }

    #[test]
    fn test_gradient_stays_between_colors() {
        let from = Rgb::new(10, 200, 50);
        let to = Rgb::new(240, 20, 50);
        let mut effect = GradientEffect::new(from, to, 1.3, 10).unwrap();
        let ticks = usize::from(effect.ticks_per_half());
        assert_eq!(ticks, 13);

        let mut frame = [BLACK; 1];
        let mut rng = always_zero();
        for tick in 1..=ticks * 6 {
            effect.update(&[0], &mut frame, &mut rng);
            let c = frame[0];
            assert!((10..=240).contains(&c.r), "tick {tick}: {c:?}");
            assert!((20..=200).contains(&c.g), "tick {tick}: {c:?}");
            assert_eq!(c.b, 50);
            if tick % (ticks * 2) == ticks {
                assert_eq!(c, to, "tick {tick}");
            }
            if tick % (ticks * 2) == 0 {
                assert_eq!(c, from, "tick {tick}");
            }
        }
    }

    #[test]
    fn test_blink_forces_black() {
        let settings = EffectSettings {
            color2: WHITE,
            ..EffectSettings::blink(0xFF0000, 0.5)
        };
        let mut effect = EffectSlot::<1>::build(&settings, 10);
        let mut frame = [WHITE; 1];
        let mut rng = always_zero();
        for _ in 0..5 {
            effect.update(&[0], &mut frame, &mut rng);
        }
        assert_eq!(frame[0], BLACK);
    }

    #[test]
    fn test_zero_period_gradient_holds_first_color() {
        let settings = EffectSettings::gradient(0x123456, 0xFFFFFF, 0.0);
        let mut effect = EffectSlot::<1>::build(&settings, 10);
        assert!(matches!(effect, EffectSlot::Static(_)));
        let mut frame = [BLACK; 1];
        effect.update(&[0], &mut frame, &mut always_zero());
        assert_eq!(frame[0], rgb_from_u32(0x123456));
    }

    #[test]
    fn test_activation_threshold() {
        assert!((activation_threshold(100, 10) - 100.0).abs() < 1e-3);
        assert_eq!(activation_threshold(0, 10), 0.0);
        assert!((activation_threshold(50, 1) - 50.0).abs() < 1e-3);
        assert!((activation_threshold(200, 10) - 100.0).abs() < 1e-3);

        // Chance of at least one ignition per second stays at 50%
        let per_tick = f64::from(activation_threshold(50, 10)) / 100.0;
        let per_second = 1.0 - (1.0 - per_tick).powi(10);
        assert!((per_second - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_flicker_ignites_and_fades() {
        let pixels = [0, 1, 2];
        let mut effect = FlickerEffect::<3>::new(rgb_from_u32(0xFF8000), 1.0, 100, 10);
        let mut frame = [BLACK; 3];
        let mut rng = always_zero();

        effect.update(&pixels, &mut frame, &mut rng);
        assert!(effect.pixels().iter().all(|p| p.is_on));
        assert_eq!(frame, [rgb_from_u32(0xFF8000); 3]);

        let mut previous = frame[0];
        let mut went_dark = None;
        for tick in 2..=11 {
            effect.update(&pixels, &mut frame, &mut rng);
            let c = frame[0];
            assert!(c.r <= previous.r && c.g <= previous.g && c.b <= previous.b);
            assert_eq!(frame[1], c);
            if c == BLACK {
                went_dark = Some(tick);
                break;
            }
            previous = c;
        }
        assert!(went_dark.is_some());
        assert!(effect.pixels().iter().all(|p| !p.is_on));

        // Full activation ignites again on the next tick
        effect.update(&pixels, &mut frame, &mut rng);
        assert!(effect.pixels().iter().all(|p| p.is_on));
    }

    #[test]
    fn test_flicker_never_ignites_without_activation() {
        let pixels = [0, 1, 2, 3];
        let mut effect = FlickerEffect::<4>::new(WHITE, 1.0, 0, 10);
        let mut frame = [RED; 4];
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            effect.update(&pixels, &mut frame, &mut rng);
            assert_eq!(frame, [BLACK; 4]);
        }
    }

    #[test]
    fn test_flicker_zero_period_fades_in_one_tick() {
        let mut effect = FlickerEffect::<1>::new(WHITE, 0.0, 100, 10);
        let mut frame = [BLACK; 1];
        let mut rng = always_zero();
        effect.update(&[0], &mut frame, &mut rng);
        assert_eq!(frame[0], WHITE);
        effect.update(&[0], &mut frame, &mut rng);
        assert_eq!(frame[0], BLACK);
    }
}
