//! ページ設定の読み込み
//!
//! `<meta name="anomaly-upload-base-url" content="...">` でベースURLを指定できる。
//! 指定がなければ同一オリジン（相対パス）。

const BASE_URL_META: &str = "meta[name=\"anomaly-upload-base-url\"]";

/// ページからベースURLを読む
pub fn base_url() -> String {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(BASE_URL_META).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));
    normalize_base_url(content)
}

pub fn normalize_base_url(content: Option<String>) -> String {
    content
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// 入力欄の文字列をcontaminationに変換する
///
/// 数値でなければNaNを返し、送信時の範囲チェックで弾く。
pub fn parse_contamination_input(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}
