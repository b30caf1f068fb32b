mod cli;

use std::path::Path;

use clap::Parser;
use eyre::{bail, eyre, WrapErr};

use coinprint_core::labels::{LabelPainter, LabelStyle, PlainPainter, QrPainter, Sheet, SheetSpec};
use coinprint_core::reprint::reprint;
use coinprint_core::sign::sign_account;
use coinprint_core::verify::{verify_paths, Mismatch};
use coinprint_core::{BundleKind, BundlePaths, EncodedSeed, SeedBatchGenerator};

use cli::Command;

const PLAIN_AMOUNT: u64 = 1_000_000_000;
const QR_AMOUNT: u64 = 2_000_000_000;

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Generate {
            count,
            amount,
            qr,
            style,
        } => generate(&args.out_dir, count, amount, qr, &style),
        Command::Reprint { seeds, amount } => {
            std::fs::create_dir_all(&args.out_dir).wrap_err_with(|| {
                format!("create output directory {}", args.out_dir.display())
            })?;
            let seeds =
                seeds.unwrap_or_else(|| BundlePaths::in_dir(&args.out_dir, BundleKind::Qr).seeds);
            let sheets = reprint(&seeds, &args.out_dir, amount)
                .wrap_err_with(|| format!("reprint labels from {}", seeds.display()))?;
            for sheet in sheets {
                println!(
                    "{} ({} labels, style {})",
                    sheet.path.display(),
                    sheet.sheet.labels,
                    sheet.style
                );
            }
            Ok(())
        }
        Command::Verify {
            qr,
            seeds,
            contract_input,
        } => {
            let kind = if qr { BundleKind::Qr } else { BundleKind::Plain };
            let bundle = BundlePaths::in_dir(&args.out_dir, kind);
            verify(
                &seeds.unwrap_or(bundle.seeds),
                &contract_input.unwrap_or(bundle.contract_input),
            )
        }
        Command::Sign { seed, account } => {
            let signed = sign_account(&EncodedSeed::new_unchecked(seed.trim()), &account)
                .context("sign account address")?;
            println!(
                "{}",
                serde_json::to_string_pretty(&signed).context("serialize signature")?
            );
            Ok(())
        }
    }
}

fn generate(
    out_dir: &Path,
    count: usize,
    amount: Option<u64>,
    qr: bool,
    style: &str,
) -> eyre::Result<()> {
    let (kind, painter): (BundleKind, Box<dyn LabelPainter>) = if qr {
        let style = LabelStyle::resolve(style)
            .wrap_err_with(|| format!("load label style `{style}`"))?;
        (BundleKind::Qr, Box::new(QrPainter::new(style)))
    } else {
        (BundleKind::Plain, Box::new(PlainPainter::new()))
    };
    let amount = amount.unwrap_or(match kind {
        BundleKind::Plain => PLAIN_AMOUNT,
        BundleKind::Qr => QR_AMOUNT,
    });

    std::fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("create output directory {}", out_dir.display()))?;

    let batch = SeedBatchGenerator::from_os_rng().generate(&vec![amount; count]);
    tracing::info!(count, amount, qr, "generated coin seeds");

    // Labels go out before the bundle so a failed render leaves no contract input.
    let labels_path = out_dir.join(kind.labels_file());
    Sheet::new(SheetSpec::A4_COINS, "Coin labels")
        .render(&batch.label_records(), painter.as_ref())
        .context("render coin labels")?
        .write_to(&labels_path)
        .context("write coin labels")?;

    let paths = BundlePaths::in_dir(out_dir, kind);
    batch.write(&paths).context("write seed bundle")?;

    println!();
    println!("  Generated {count} coins:");
    println!("    Labels:          {}", labels_path.display());
    println!("    Seeds:           {}", paths.seeds.display());
    println!("    Contract input:  {}", paths.contract_input.display());
    println!();
    Ok(())
}

fn verify(seeds: &Path, contract_input: &Path) -> eyre::Result<()> {
    let report = verify_paths(seeds, contract_input).wrap_err_with(|| {
        format!(
            "verify {} against {}",
            seeds.display(),
            contract_input.display()
        )
    })?;

    for mismatch in &report.mismatches {
        match mismatch {
            Mismatch::Undecodable { index, reason } => {
                println!("  #{index}: seed does not decode ({reason})");
            }
            Mismatch::WrongKey {
                index,
                expected,
                derived,
            } => {
                println!("  #{index}: contract key {expected}, seed derives {derived}");
            }
        }
    }

    let total = report
        .total_amount
        .ok_or_else(|| eyre!("contract input holds an amount that is not a number"))?;
    if !report.mismatches.is_empty() {
        bail!(
            "{} of {} coins do not match their contract entry",
            report.mismatches.len(),
            report.checked
        );
    }

    println!(
        "{} coins verified, total face value {} micro-units",
        report.checked, total
    );
    Ok(())
}
