use anyhow::Result;
use bench_core::{pipeline, ChartDefinition, Family, PlotConfig, Table};
use bench_render_skia::{RenderOptions, SkiaRenderer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn decode_table(points: usize) -> Table {
    let sizes: Vec<f64> = (0..points).map(|i| (64u64 << i) as f64).collect();
    let mut series = vec![("size".to_string(), sizes)];
    for w in [8, 16, 24, 32, 48] {
        for kind in ["rel", "abs"] {
            let values = (0..points).map(|i| (i as f64 * 0.7).sin() * 4_000.0 + 20_000.0 + w as f64 * 100.0).collect();
            series.push((format!("decode_{kind}_{w}_mib_sec"), values));
        }
    }
    Table::from_series(series).expect("table")
}

fn bench_render(c: &mut Criterion) {
    let def = ChartDefinition::resolve(Family::Decode, 64, &PlotConfig::default()).expect("def");
    let mut group = c.benchmark_group("render_png_bytes");
    for &dpi in &[72u32, 240u32] {
        group.bench_function(format!("decode_64_{dpi}dpi"), |b| {
            let chart = pipeline::build_chart(&decode_table(16), &def).expect("chart");
            let mut opts = RenderOptions::default();
            opts.dpi = dpi;
            opts.draw_labels = false;
            let renderer = SkiaRenderer::new(opts);
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_to_png_bytes(&chart)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
