//! Benchmark for deck-list import and export

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ptcg_decklist::{export_json, export_text, validate_deck, DeckLoader};
use std::fs;
use std::path::PathBuf;

fn load_sample_lists() -> Vec<(String, String)> {
    let deck_dir = PathBuf::from("test_decks");

    let mut lists = Vec::new();
    if let Ok(entries) = fs::read_dir(&deck_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("txt") {
                if let Ok(contents) = fs::read_to_string(&path) {
                    let filename = path.file_name().unwrap().to_string_lossy().to_string();
                    lists.push((filename, contents));
                }
            }
        }
    }

    if lists.is_empty() {
        eprintln!("Warning: test_decks not found, using synthetic sample");
        lists.push((
            "synthetic.txt".to_string(),
            "Pokémon: 12\n4 Charmander PAF 7\n4 Charizard ex OBF 125\n4 Pidgey OBF 162\n\
             Trainer: 8\n4 Ultra Ball SVI 196\n4 Nest Ball SVI 181\n\
             Energy: 40\n40 Fire Energy SVE 2\n"
                .to_string(),
        ));
    }

    lists
}

fn bench_import_text(c: &mut Criterion) {
    let lists = load_sample_lists();
    let mut group = c.benchmark_group("import_text");

    for (name, contents) in &lists {
        group.throughput(Throughput::Bytes(contents.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), contents, |b, contents| {
            b.iter(|| DeckLoader::parse_text(black_box(contents)))
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let decks: Vec<_> = load_sample_lists()
        .into_iter()
        .map(|(name, contents)| (name, DeckLoader::parse_text(&contents)))
        .collect();
    let mut group = c.benchmark_group("export");

    for (name, deck) in &decks {
        group.bench_with_input(BenchmarkId::new("text", name), deck, |b, deck| {
            b.iter(|| export_text(black_box(deck)))
        });
        group.bench_with_input(BenchmarkId::new("json", name), deck, |b, deck| {
            b.iter(|| export_json(black_box(deck)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("validate", name), deck, |b, deck| {
            b.iter(|| validate_deck(black_box(deck)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_import_text, bench_export);
criterion_main!(benches);
