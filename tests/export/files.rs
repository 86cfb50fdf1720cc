use stitchkit::{import_dst, write_chunked, ExportFormat, ExportService, StitchModel};
use tempfile::tempdir;

fn two_segments() -> StitchModel {
    let mut model = StitchModel::new();
    model.move_to(0.0, 0.0, 10.0, 10.0, true);
    model.move_to(10.0, 10.0, 20.0, 20.0, true);
    model
}

#[test]
fn test_write_chunked_counts_chunks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");
    let bytes: Vec<u8> = (0..2500u32).map(|i| (i % 251) as u8).collect();

    assert_eq!(write_chunked(&path, &bytes, 1024).unwrap(), 3);
    assert_eq!(std::fs::read(&path).unwrap(), bytes);

    assert_eq!(write_chunked(&path, &[], 1024).unwrap(), 0);
    assert!(std::fs::read(&path).unwrap().is_empty());
}

#[test]
fn test_export_to_dir_uses_file_name() {
    let dir = tempdir().unwrap();
    let service = ExportService::default();

    for format in ExportFormat::ALL {
        let path = service
            .export_to_dir(&two_segments(), format, "test", dir.path())
            .unwrap();
        assert_eq!(path, dir.path().join(format!("test.{}", format.extension())));
        assert!(path.exists());
    }
}

#[test]
fn test_dst_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.dst");
    ExportService::default()
        .export_to_file(&two_segments(), ExportFormat::Dst, "test", &path)
        .unwrap();

    let model = import_dst(&path).unwrap();
    assert_eq!(model.steps(), two_segments().steps());
    assert_eq!(model.max_x(), 20.0);
    assert_eq!(model.max_y(), 20.0);
}

#[test]
fn test_import_rejects_short_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.dst");
    std::fs::write(&path, [0u8; 100]).unwrap();

    let err = import_dst(&path).unwrap_err();
    assert!(err.is_format_error());
}

#[test]
fn test_import_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = import_dst(&dir.path().join("absent.dst")).unwrap_err();
    assert!(matches!(err, stitchkit::Error::Io(_)));
}
