use super::*;
use crate::design::gradient::{INNER, OUTER};

fn layers(ops: &[DrawOp]) -> Vec<Layer> {
    let mut out: Vec<Layer> = Vec::new();
    for op in ops {
        if out.last() != Some(&op.layer()) {
            out.push(op.layer());
        }
    }
    out
}

#[test]
fn draw_order_is_fixed() {
    let ops = compile_design(&IconDesign::at_size(192).unwrap());
    assert_eq!(
        layers(&ops),
        vec![
            Layer::Background,
            Layer::Shield,
            Layer::CameraBody,
            Layer::Lens,
            Layer::Accent,
            Layer::AiBadge,
            Layer::FreeLabel,
        ]
    );
    assert!(matches!(ops.last(), Some(DrawOp::Text { .. })));
}

#[test]
fn background_rings_shrink_from_rim_to_center() {
    let ops = compile_design(&IconDesign::at_size(192).unwrap());
    let rings: Vec<(i32, Rgba8)> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillDisc {
                layer: Layer::Background,
                disc,
                color,
            } => Some((disc.r, *color)),
            _ => None,
        })
        .collect();

    assert_eq!(rings.len(), 90);
    assert_eq!(rings.first(), Some(&(90, OUTER)));
    assert_eq!(rings.last(), Some(&(1, INNER)));
    assert!(rings.windows(2).all(|w| w[0].0 == w[1].0 + 1));
}

#[test]
fn lens_dot_is_painted_after_ring() {
    let ops = compile_design(&IconDesign::at_size(96).unwrap());
    let lens: Vec<&DrawOp> = ops.iter().filter(|op| op.layer() == Layer::Lens).collect();
    assert_eq!(lens.len(), 2);
    let DrawOp::FillDisc { disc: ring, .. } = lens[0] else {
        panic!("lens ring should be a disc");
    };
    let DrawOp::FillDisc { disc: dot, color, .. } = lens[1] else {
        panic!("lens dot should be a disc");
    };
    assert!(dot.r < ring.r);
    assert_eq!(*color, Rgba8::WHITE);
}

#[test]
fn center_anchor_uses_floor_halving_and_nudge() {
    let a = TextAnchor::Center { cx: 130, cy: 140 };
    assert_eq!(a.origin(15, 11), (123, 134));
    assert_eq!(a.origin(16, 10), (122, 134));
}

#[test]
fn within_anchor_centers_inside_box() {
    let b = RoundedBox {
        x: 20,
        y: 145,
        w: 45,
        h: 22,
        radius: 4,
    };
    assert_eq!(TextAnchor::Within(b).origin(24, 12), (30, 149));
    // Text wider than the box overhangs on both sides, floor-biased left.
    assert_eq!(TextAnchor::Within(b).origin(50, 12), (17, 149));
}
