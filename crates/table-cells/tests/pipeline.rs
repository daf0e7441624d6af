mod common;

use common::{render_table, COLS, ROWS};
use table_cells::detect::detect_table_default;
use table_cells::export::{cell_file_name, export_cells, save_masks};

#[test]
fn rendered_table_yields_nine_cells() {
    let img = render_table();
    let found = detect_table_default(&img).expect("detect");
    let result = &found.result;

    assert_eq!(result.reason, None);
    // Two-pixel lines cluster onto their last row/column.
    let expected_rows: Vec<i32> = ROWS.iter().map(|&r| r as i32 + 1).collect();
    let expected_cols: Vec<i32> = COLS.iter().map(|&c| c as i32 + 1).collect();
    assert_eq!(result.summary.horizontal_lines, expected_rows);
    assert_eq!(result.summary.vertical_lines, expected_cols);

    assert_eq!(result.cells.len(), 9);
    let first = result.cells[0];
    assert_eq!(
        (first.top, first.bottom, first.left, first.right),
        (21, 71, 21, 81)
    );
    assert!(result.cells.iter().all(|c| !c.is_merged()));
}

#[test]
fn intersection_mask_is_and_of_line_masks() {
    let found = detect_table_default(&render_table()).expect("detect");
    let m = &found.masks;
    for i in 0..m.intersection.data.len() {
        let both = m.horizontal.data[i] > 0 && m.vertical.data[i] > 0;
        assert_eq!(m.intersection.data[i] > 0, both);
        let any = m.horizontal.data[i] > 0 || m.vertical.data[i] > 0;
        assert_eq!(m.table.data[i] > 0, any);
    }
    // 16 nodes of 2x2 pixels.
    let fg = m.intersection.data.iter().filter(|&&v| v > 0).count();
    assert_eq!(fg, 64);
}

#[test]
fn export_writes_one_crop_per_cell() {
    let gray = render_table();
    let found = detect_table_default(&gray).expect("detect");
    let rgb = image::DynamicImage::ImageLuma8(gray).to_rgb8();
    let dir = tempfile::tempdir().expect("tempdir");

    let written = export_cells(&rgb, &found.result.cells, dir.path(), "table").expect("export");
    assert_eq!(written.len(), 9);
    for (path, cell) in written.iter().zip(&found.result.cells) {
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(cell_file_name("table", cell).as_str())
        );
        let crop = image::open(path).expect("read crop").to_rgb8();
        assert_eq!(crop.width() as i32, cell.width());
        assert_eq!(crop.height() as i32, cell.height());
    }
    assert!(dir.path().join("table_r0-1_c0-1.png").exists());
    assert!(dir.path().join("table_r2-3_c2-3.png").exists());

    let masks = save_masks(&found.masks, dir.path()).expect("masks");
    assert_eq!(masks.len(), 5);
    assert!(dir.path().join("intersection.png").exists());
}
