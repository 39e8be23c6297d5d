use clap::Parser;
use upscale_finder::{cli, config, copier, error, matcher, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use matcher::ReconcileReport;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { reference_root, candidate_root, dry_run, special_layouts, extensions } => {
            let mut config = Config::load()?;

            // CLI引数が設定ファイルより優先
            if let Some(root) = reference_root {
                config.reference_root = root;
            }
            if let Some(root) = candidate_root {
                config.candidate_root = root;
            }
            if dry_run {
                config.dry_run = true;
            }
            if special_layouts {
                config.scan_special_layouts = true;
            }
            if let Some(exts) = extensions {
                config.extensions = exts;
            }

            config.validate()?;

            println!("🎴 upscale-finder - アップスケール済みアートの照合\n");

            if cli.verbose {
                println!("参照ルート: {}", config.reference_root.display());
                println!("候補ルート: {}", config.candidate_root.display());
                println!("拡張子: {}\n", config.extensions.join(", "));
            }

            // 1. 参照側スキャン
            println!("[1/4] 参照アートをスキャン中...");
            let references = scanner::scan_root(
                &config.reference_root,
                &config.extensions,
                config.scan_special_layouts,
            )?;
            println!("✔ {}枚を検出\n", references.len());

            // 2. 候補側スキャン
            println!("[2/4] 候補アートをスキャン中...");
            let candidates = scanner::scan_root(
                &config.candidate_root,
                &config.extensions,
                config.scan_special_layouts,
            )?;
            println!("✔ {}枚を検出\n", candidates.len());

            // 3. 照合
            println!("[3/4] ファイル名を照合中...");
            let report = matcher::reconcile(&references, &candidates);
            println!("✔ 照合完了\n");

            // 4. コピーとログ出力
            println!(
                "[4/4] 結果を出力中...{}\n",
                if config.dry_run { " (ドライラン)" } else { "" }
            );
            write_outputs(&report, &config)?;

            println!("\n✅ 完了");
        }

        Commands::Config { set_reference_root, set_candidate_root, show } => {
            let mut config = Config::load()?;

            if let Some(root) = set_reference_root {
                config.reference_root = root;
                config.save()?;
                println!("✔ 参照ルートを設定しました");
            }

            if let Some(root) = set_candidate_root {
                config.candidate_root = root;
                config.save()?;
                println!("✔ 候補ルートを設定しました");
            }

            if show {
                println!("設定:");
                println!("  参照ルート: {}", config.reference_root.display());
                println!("  候補ルート: {}", config.candidate_root.display());
                println!("  拡張子: {}", config.extensions.join(", "));
                println!("  特殊レイアウト走査: {}", config.scan_special_layouts);
                println!("  ドライラン: {}", config.dry_run);
            }
        }
    }

    Ok(())
}

/// 3分割した照合結果をコンソール・コピー先・ログへ出力する
///
/// 出力順は 未発見 → アーティスト不明 → 完全一致。未発見リストは
/// 1件以上ある場合だけ書き出す。
fn write_outputs(report: &ReconcileReport, config: &Config) -> Result<()> {
    let destination = config.reference_root.join(copier::DESTINATION_DIR);
    let ambiguous_destination = destination.join(copier::AMBIGUOUS_DIR);
    let total = report.total_refs;

    // 未発見
    println!(
        "==== 未発見 ({}/{}) - 対応するカード名が見つからなかったアート ====",
        report.missing_refs(),
        total
    );
    if report.missing.is_empty() {
        println!("なし");
    } else {
        for name in &report.missing {
            println!("{}", name);
        }
        let log_path = copier::write_missing_log(&report.missing, &destination)?;
        println!("未発見リストを保存: {}", log_path.display());
    }
    println!();

    // アーティスト不明
    println!(
        "==== アーティスト不明 ({}/{}) - カード名のみ一致したアート ====",
        report.ambiguous_refs, total
    );
    if report.ambiguous.is_empty() {
        println!("なし");
    } else {
        copier::copy_pairs(&report.ambiguous, &ambiguous_destination, config.dry_run)?;
    }
    println!();

    // 完全一致
    println!(
        "==== 完全一致 ({}/{}) - カード名とアーティスト名が一致したアート ====",
        report.matched_refs, total
    );
    if report.matched.is_empty() {
        println!("なし");
    } else {
        let summary = copier::copy_pairs(&report.matched, &destination, config.dry_run)?;
        if summary.failed > 0 {
            println!("警告: {}件のコピーに失敗しました", summary.failed);
        }
    }

    Ok(())
}
