use super::*;

fn two_by_one(data: [u8; 8]) -> RenderedIcon {
    RenderedIcon {
        width: 2,
        height: 1,
        data: data.to_vec(),
    }
}

#[test]
fn unpremultiply_handles_opaque_translucent_and_clear() {
    let mut px = [200, 100, 50, 255, 64, 32, 0, 128, 9, 9, 9, 0];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[0..4], &[200, 100, 50, 255]);
    assert_eq!(&px[4..8], &[128, 64, 0, 128]);
    assert_eq!(&px[8..12], &[0, 0, 0, 0]);
}

#[test]
fn pixel_reads_straight_alpha() {
    let icon = two_by_one([0, 0, 0, 0, 64, 32, 0, 128]);
    assert_eq!(icon.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(icon.pixel(1, 0), [128, 64, 0, 128]);
}

#[test]
#[should_panic]
fn pixel_out_of_bounds_panics() {
    let icon = two_by_one([0; 8]);
    let _ = icon.pixel(2, 0);
}

#[test]
fn png_decodes_to_straight_buffer() {
    let icon = two_by_one([255, 152, 0, 255, 64, 32, 0, 128]);
    let png = icon.encode_png().unwrap();
    assert_eq!(&png[1..4], b"PNG");

    let decoded = decode_png(&png).unwrap();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.into_raw(), icon.straight_rgba());
}

#[test]
fn mismatched_buffer_is_a_render_error() {
    let icon = RenderedIcon {
        width: 4,
        height: 4,
        data: vec![0; 3],
    };
    assert!(matches!(icon.to_rgba_image(), Err(IconError::Render(_))));
}
