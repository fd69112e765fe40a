use super::*;

#[test]
fn reference_size_reproduces_authored_geometry() {
    let d = IconDesign::at_size(192).unwrap();
    assert_eq!(d.background, Disc { cx: 96, cy: 96, r: 90 });
    assert_eq!(d.ai_badge, Disc { cx: 130, cy: 140, r: 18 });
    assert_eq!(d.lens_ring, Disc { cx: 85, cy: 89, r: 10 });
    assert_eq!(d.lens_dot, Disc { cx: 85, cy: 89, r: 5 });
    assert_eq!(
        d.camera_body,
        RoundedBox {
            x: 60,
            y: 70,
            w: 50,
            h: 38,
            radius: 6
        }
    );
    assert_eq!(d.shield.len(), 8);
    assert_eq!(d.shield[3], Point::new(125.0, 145.0));
    assert_eq!(d.accent.len(), 4);
    assert_eq!(d.ai_text.size_px, 14);
    assert_eq!(d.free_label_text.size_px, 12);
}

#[test]
fn smallest_bucket_respects_floors() {
    let d = IconDesign::at_size(48).unwrap();
    assert_eq!(d.ai_badge, Disc { cx: 33, cy: 35, r: 5 });
    assert_eq!(d.ai_text.size_px, 8);
    assert_eq!(d.free_label_text.size_px, 6);
    assert_eq!(d.background.r, 23);
    assert_eq!(d.lens_dot.r, 1);
    for b in [d.camera_body, d.free_label] {
        assert!(b.w >= 1 && b.h >= 1 && b.radius >= 1);
    }
}

#[test]
fn lens_dot_is_scaled_independently() {
    // 72/192 = 0.375: ring 3.75 -> 4, dot 1.875 -> 2
    let d = IconDesign::at_size(72).unwrap();
    assert_eq!(d.lens_ring.r, 4);
    assert_eq!(d.lens_dot.r, 2);
}

#[test]
fn landmarks_scale_linearly() {
    for size in [48u32, 72, 96, 144, 192] {
        let d = IconDesign::at_size(size).unwrap();
        let f = f64::from(size) / 192.0;
        assert!((f64::from(d.ai_badge.cx) - 130.0 * f).abs() <= 1.0);
        assert!((f64::from(d.ai_badge.cy) - 140.0 * f).abs() <= 1.0);
        assert!((f64::from(d.free_label.x) - 20.0 * f).abs() <= 1.0);
        assert_eq!(d.ai_badge.r.max(1), d.ai_badge.r);
    }
}

#[test]
fn badge_colors_do_not_scale() {
    let small = IconDesign::at_size(48).unwrap();
    let large = IconDesign::at_size(192).unwrap();
    assert_eq!(small.ai_text.color, large.ai_text.color);
    assert_eq!(small.free_label_text.slot, FontSlot::FreeLabel);
    assert_eq!(large.ai_text.slot, FontSlot::AiBadge);
}

#[test]
fn zero_size_is_rejected() {
    assert!(IconDesign::at_size(0).is_err());
}
