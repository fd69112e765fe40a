use super::*;
use crate::output::plan::{DensityBucket, IconVariant};
use crate::render::icon::decode_png;

fn solid_icon(size: u32) -> RenderedIcon {
    RenderedIcon {
        width: size,
        height: size,
        data: [76u8, 175, 80, 255].repeat((size * size) as usize),
    }
}

fn target(path: PathBuf) -> IconTarget {
    IconTarget {
        size: 4,
        bucket: DensityBucket::Mdpi,
        variant: IconVariant::Round,
        path,
    }
}

#[test]
fn png_sink_creates_directories_and_writes_png() {
    let dir = PathBuf::from("target").join("png_sink_unit");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("mipmap-mdpi").join("ic_launcher_round.png");

    let mut sink = PngFileSink::new();
    sink.write_icon(&target(path.clone()), &solid_icon(4)).unwrap();
    assert_eq!(sink.written(), &[path.clone()]);

    let decoded = decode_png(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(decoded.dimensions(), (4, 4));
    assert_eq!(decoded.get_pixel(3, 3).0, [76, 175, 80, 255]);
}

#[test]
fn png_sink_reports_unwritable_path() {
    let dir = PathBuf::from("target").join("png_sink_blocked");
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();

    let mut sink = PngFileSink::new();
    let err = sink
        .write_icon(&target(blocker.join("icon.png")), &solid_icon(2))
        .unwrap_err();
    assert!(matches!(err, IconError::Io { .. }));
    assert!(sink.written().is_empty());
}

#[test]
fn memory_sink_keeps_order() {
    let mut sink = InMemorySink::new();
    sink.write_icon(&target("a.png".into()), &solid_icon(1)).unwrap();
    sink.write_icon(&target("b.png".into()), &solid_icon(2)).unwrap();
    let paths: Vec<_> = sink.icons().iter().map(|(t, _)| t.path.clone()).collect();
    assert_eq!(paths, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
    assert_eq!(sink.icons()[1].1.width, 2);
}
