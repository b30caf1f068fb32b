use std::path::Path;
use std::sync::Once;

use coinprint_core::bundle::{load_contract_input, load_seeds};
use coinprint_core::labels::{LabelStyle, PlainPainter, QrPainter, Sheet, SheetSpec};
use coinprint_core::reprint::{reprint, REPRINT_AMOUNT};
use coinprint_core::verify::verify_files;
use coinprint_core::{BundleKind, BundlePaths, SeedBatchGenerator};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("coinprint_core=debug")),
            )
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

fn generate_into(dir: &Path, kind: BundleKind, amount: u64, count: usize) -> BundlePaths {
    let batch = SeedBatchGenerator::from_os_rng().generate(&vec![amount; count]);
    let paths = BundlePaths::in_dir(dir, kind);
    batch.write(&paths).expect("write bundle");

    let layout = Sheet::new(SheetSpec::A4_COINS, "Coin labels");
    let sheet = match kind {
        BundleKind::Plain => layout.render(&batch.label_records(), &PlainPainter::new()),
        BundleKind::Qr => layout.render(
            &batch.label_records(),
            &QrPainter::new(LabelStyle::resolve("coin").expect("coin style")),
        ),
    }
    .expect("render labels");
    sheet
        .write_to(&dir.join(kind.labels_file()))
        .expect("write labels");
    paths
}

#[test]
fn plain_batch_writes_ten_entries_that_verify() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");

    let paths = generate_into(dir.path(), BundleKind::Plain, 1_000_000_000, 10);

    let seeds = load_seeds(&paths.seeds).expect("load seeds");
    let input = load_contract_input(&paths.contract_input).expect("load contract input");
    assert_eq!(seeds.len(), 10);
    assert_eq!(input.coins.len(), 10);
    assert!(input.coins.iter().all(|c| c.amount() == "1000000000"));
    assert!(dir.path().join("coin-labels.pdf").exists());

    let report = verify_files(&paths).expect("verify");
    assert!(report.is_ok(), "{report:?}");
    assert_eq!(report.total_amount, Some(10_000_000_000));
}

#[test]
fn qr_batch_then_reprint() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");

    let paths = generate_into(dir.path(), BundleKind::Qr, 2_000_000_000, 10);
    assert!(paths.seeds.ends_with("qr-coin-seeds.json"));
    assert!(paths.contract_input.ends_with("qr-sc-input.json"));
    assert!(dir.path().join("qr-coin-labels.pdf").exists());

    let reprint_dir = tempfile::tempdir().expect("tempdir");
    let sheets = reprint(&paths.seeds, reprint_dir.path(), REPRINT_AMOUNT).expect("reprint");

    assert_eq!(sheets.len(), 2);
    for sheet in &sheets {
        assert_eq!(sheet.sheet.labels, 10);
        assert_eq!(sheet.sheet.pages, 1);
        let pdf = std::fs::read(&sheet.path).expect("read reprinted pdf");
        assert!(pdf.starts_with(b"%PDF"));
    }
}

#[test]
fn separate_runs_never_share_seeds() {
    init_tracing();
    let first = tempfile::tempdir().expect("tempdir");
    let second = tempfile::tempdir().expect("tempdir");

    let a = generate_into(first.path(), BundleKind::Plain, 1, 10);
    let b = generate_into(second.path(), BundleKind::Plain, 1, 10);

    let a = load_seeds(&a.seeds).expect("load first");
    let b = load_seeds(&b.seeds).expect("load second");
    assert!(a.iter().all(|seed| !b.contains(seed)));
}
