use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anomaly-upload")]
#[command(about = "CSVをアップロードして異常検知サービスに問い合わせるクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// サービスのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ファイルのカラム一覧を表示
    Columns {
        /// CSVファイルのパス
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 選択したカラムで異常検知を実行
    Detect {
        /// CSVファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 対象カラム（カンマ区切り、省略時は対話選択）
        #[arg(short, long)]
        columns: Option<String>,

        /// 異常データの想定割合 (0 < c < 1、省略時は設定値)
        #[arg(long)]
        contamination: Option<f64>,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// contaminationのデフォルト値を設定
        #[arg(long)]
        set_contamination: Option<f64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `--columns a,b,c` を分割する
///
/// 空要素は無視し、前後の空白は取り除く。
pub fn parse_column_list(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_column_list() {
        assert_eq!(parse_column_list("temp, pressure ,flow"), vec!["temp", "pressure", "flow"]);
        assert_eq!(parse_column_list("a,,b,"), vec!["a", "b"]);
        assert!(parse_column_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_detect_args() {
        let cli = Cli::parse_from([
            "anomaly-upload",
            "--base-url",
            "http://localhost:8000",
            "detect",
            "data.csv",
            "--columns",
            "a,b",
            "--contamination",
            "0.1",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
        match cli.command {
            Commands::Detect { file, columns, contamination, output } => {
                assert_eq!(file, PathBuf::from("data.csv"));
                assert_eq!(columns.as_deref(), Some("a,b"));
                assert_eq!(contamination, Some(0.1));
                assert!(output.is_none());
            }
            _ => panic!("detectコマンドとして解釈されていない"),
        }
    }
}
