#![allow(dead_code)]

use image::{GrayImage, Luma};

pub const ROWS: [u32; 4] = [20, 70, 120, 170];
pub const COLS: [u32; 4] = [20, 80, 140, 200];

/// Light page with a dark 3x3 bordered table, 2 px lines.
pub fn render_table() -> GrayImage {
    let mut img = GrayImage::from_pixel(240, 200, Luma([235]));
    let (x0, x1) = (COLS[0], COLS[3] + 1);
    let (y0, y1) = (ROWS[0], ROWS[3] + 1);
    for &r in &ROWS {
        for y in r..=r + 1 {
            for x in x0..=x1 {
                img.put_pixel(x, y, Luma([15]));
            }
        }
    }
    for &c in &COLS {
        for x in c..=c + 1 {
            for y in y0..=y1 {
                img.put_pixel(x, y, Luma([15]));
            }
        }
    }
    img
}
