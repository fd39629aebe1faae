//! Benchmarks for section detection and page layout.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_possible_wrap)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use songsheet::layout::calculate_layout;
use songsheet::sections::detect_sections;
use songsheet::{Area, CellValue, Grid, LayoutConfig};

/// A chords grid with `sections` stanzas of four lyric lines each, separated
/// by a blank row pair.
fn chords_grid(sections: usize) -> Grid {
    let mut grid = Grid::new();
    for section in 0..sections {
        for line in 0..4 {
            grid.push(vec![
                CellValue::from("Am7"),
                CellValue::Empty,
                CellValue::from("G"),
                CellValue::Empty,
            ]);
            grid.push(vec![
                CellValue::from(format!("verse {section} line {line}")),
                CellValue::Empty,
                CellValue::from("and the rest"),
                CellValue::Empty,
            ]);
        }
        grid.push(vec![CellValue::Empty; 4]);
        grid.push(vec![CellValue::Empty; 4]);
    }
    grid
}

fn bench_detect_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_sections");

    for sections in [4, 32, 256] {
        let grid = chords_grid(sections);
        group.throughput(Throughput::Elements(grid.len() as u64));
        group.bench_with_input(BenchmarkId::new("stanzas", sections), &grid, |b, grid| {
            b.iter(|| detect_sections(black_box(grid)))
        });
    }

    group.finish();
}

fn bench_calculate_layout(c: &mut Criterion) {
    let config = LayoutConfig::new(80, 60, 4).with_padding(2, 1);
    let mut group = c.benchmark_group("calculate_layout");

    for count in [8, 64, 512] {
        let sections: Vec<Area> = (0..count)
            .map(|i| Area::new(0, 0, 10 + (i % 7) as i64, 4 + 2 * (i % 5) as i64))
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("sections", count), &sections, |b, sections| {
            b.iter(|| calculate_layout(black_box(sections), &config).expect("layout failed"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_detect_sections, bench_calculate_layout);
criterion_main!(benches);
