use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use proseweave_engine::{
    editing::{Cmd, EditorState},
    markup::parse_markup,
    model::Document,
};

fn generate_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** *content*.\nSecond line.\n\n- Bullet point\n- Another *item*\n\n";
    base.repeat(size)
}

fn bench_text_to_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    for size in [10, 100, 1000] {
        let content = generate_content(size);
        group.bench_with_input(BenchmarkId::new("text_to_markup", size), &content, |b, text| {
            b.iter(|| {
                let markup = Document::from_text(std::hint::black_box(text)).to_markup();
                std::hint::black_box(markup);
            });
        });
    }

    group.finish();
}

fn bench_markup_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup");
    group.sample_size(10);

    let markup = Document::from_text(&generate_content(100)).to_markup();
    group.bench_function("parse_markup", |b| {
        b.iter(|| std::hint::black_box(parse_markup(std::hint::black_box(&markup))));
    });

    group.finish();
}

fn bench_toggle_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("commands");
    group.sample_size(10);

    let content = generate_content(100);
    group.bench_function("toggle_bold_select_all", |b| {
        b.iter_batched(
            || {
                let mut state = EditorState::from_text(&content);
                state.select_all();
                state
            },
            |mut state| std::hint::black_box(state.apply(Cmd::ToggleBold)),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_text_to_markup, bench_markup_read, bench_toggle_all);
criterion_main!(benches);
