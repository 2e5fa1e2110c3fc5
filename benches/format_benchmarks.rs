//! Performance benchmarks for the input masks, the CPF validator and client search.
//!
//! The masks run on every keystroke, so they are measured over each prefix
//! of a typed value. Search is measured over registries of different sizes.

use chrono::Local;
use client_registry::domain::{
    check_digits, format_identifier, format_phone, validate_identifier, ClientId, Cpf,
    PhoneNumber,
};
use client_registry::matching::ClientMatcher;
use client_registry::models::{Client, ClientDraft, TreatmentFlags};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

const FIRST_NAMES: [&str; 6] = ["Maria", "João", "Ana", "Pedro", "Luiza", "Carlos"];
const LAST_NAMES: [&str; 5] = ["Souza", "Pereira", "Oliveira", "Santos", "Lima"];

/// Build a registry of `count` clients with valid, distinct CPFs.
fn create_clients(count: usize) -> Vec<Client> {
    (0..count)
        .map(|i| {
            let base_number = 100_000_000 + (i as u64) * 7_919;
            let mut base = [0u8; 9];
            for (pos, digit) in base_number.to_string().bytes().enumerate() {
                base[pos] = digit - b'0';
            }
            let [first, second] = check_digits(&base);
            let cpf_digits: String = base
                .iter()
                .chain([first, second].iter())
                .map(|d| char::from(b'0' + d))
                .collect();

            let draft = ClientDraft {
                cpf: Cpf::parse(&cpf_digits).unwrap(),
                name: format!(
                    "{} {}",
                    FIRST_NAMES[i % FIRST_NAMES.len()],
                    LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()]
                ),
                phone: PhoneNumber::parse(&format!("219{:08}", i)).unwrap(),
                registered_at: Local::now(),
                treatment: TreatmentFlags::default(),
                birth_date: None,
                medication: None,
            };
            Client::from_draft(ClientId::new(i as u64 + 1).unwrap(), draft)
        })
        .collect()
}

/// Benchmark the masks as they are applied while a value is typed.
fn bench_masks_while_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("masks_while_typing");

    group.bench_function("format_identifier", |b| {
        let typed = "52998224725";
        b.iter(|| {
            let mut shown = String::new();
            for end in 1..=typed.len() {
                shown = format_identifier(black_box(&typed[..end]));
            }
            shown
        });
    });

    group.bench_function("format_phone", |b| {
        let typed = "21987654321";
        b.iter(|| {
            let mut shown = String::new();
            for end in 1..=typed.len() {
                shown = format_phone(black_box(&typed[..end]));
            }
            shown
        });
    });

    group.finish();
}

/// Benchmark the CPF validator on valid, invalid and repeated inputs.
fn bench_validate_identifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_identifier");

    for input in ["529.982.247-25", "111.444.777-36", "00000000000"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| validate_identifier(black_box(input)));
        });
    }

    group.finish();
}

/// Benchmark client search with different registry sizes.
fn bench_find_matches(c: &mut Criterion) {
    let matcher = ClientMatcher::new();
    let mut group = c.benchmark_group("find_matches");

    for size in [100, 1_000, 5_000] {
        let clients = create_clients(size);

        group.bench_with_input(BenchmarkId::new("fuzzy_name", size), &clients, |b, clients| {
            b.iter(|| matcher.find_matches(black_box("maria sousa"), clients, 10, 30));
        });

        group.bench_with_input(BenchmarkId::new("exact_cpf", size), &clients, |b, clients| {
            let cpf = clients[clients.len() / 2].cpf.formatted();
            b.iter(|| matcher.find_matches(black_box(&cpf), clients, 10, 30));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_masks_while_typing,
        bench_validate_identifier,
        bench_find_matches
}

criterion_main!(benches);
