use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use mask_core::{
    EditEvent, FieldId, MaskedFieldStore, NumberingPlan, evaluate, format_digits,
    reconcile_position,
};

const FULL: &str = "+7(999) 123-45-67";
const FIELDS: u64 = 1_000;

fn bench_format_full(c: &mut Criterion) {
    let plan = NumberingPlan::plus_seven();
    c.bench_function("bench_format_full", |b| {
        b.iter(|| black_box(format_digits(&plan, black_box("89991234567"))));
    });
}

fn bench_format_international(c: &mut Criterion) {
    let plan = NumberingPlan::plus_seven();
    c.bench_function("bench_format_international", |b| {
        b.iter(|| black_box(format_digits(&plan, black_box("4420 7946 0958 12"))));
    });
}

fn bench_reconcile(c: &mut Criterion) {
    c.bench_function("bench_reconcile", |b| {
        b.iter(|| {
            for k in 0..=11 {
                black_box(reconcile_position(black_box(FULL), k));
            }
        });
    });
}

fn bench_type_number(c: &mut Criterion) {
    let plan = NumberingPlan::plus_seven();
    c.bench_function("bench_type_number", |b| {
        b.iter(|| {
            let mut text = String::new();
            let mut caret = 0;
            for ch in "9991234567".chars() {
                let out = evaluate(&plan, &text, caret, &EditEvent::KeyStroke(ch));
                text = out.new_display_text;
                caret = out.new_caret_offset;
            }
            black_box((text, caret));
        });
    });
}

fn bench_backspace_mid_number(c: &mut Criterion) {
    let plan = NumberingPlan::plus_seven();
    c.bench_function("bench_backspace_mid_number", |b| {
        b.iter(|| black_box(evaluate(&plan, black_box(FULL), 10, &EditEvent::Backspace)));
    });
}

fn bench_store_paste_many_fields(c: &mut Criterion) {
    let paste = EditEvent::Paste("8 (999) 123-45-67".to_string());
    c.bench_function("bench_store_paste_many_fields", |b| {
        b.iter_batched(
            || {
                let mut store = MaskedFieldStore::default();
                store.attach_all((0..FIELDS).map(|raw| (FieldId::from(raw), "")));
                store
            },
            |mut store| {
                for raw in 0..FIELDS {
                    store.apply(FieldId::from_raw(raw), &paste);
                }
                black_box(store.len());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_format_full,
    bench_format_international,
    bench_reconcile,
    bench_type_number,
    bench_backspace_mid_number,
    bench_store_paste_many_fields
);
criterion_main!(benches);
