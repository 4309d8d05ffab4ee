//! ファイル読み込みの世代管理
//!
//! 読み込みは非同期に完了するため、選択を変更するたびに番号を振り、
//! 最新の番号の読み込みだけをコントローラへ反映する。

/// 読み込みの番号
pub type ReadStamp = u64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileReads {
    latest: ReadStamp,
    pending: bool,
}

impl FileReads {
    /// 新しい読み込みを開始する。以前の読み込みは無効になる
    pub fn start(&mut self) -> ReadStamp {
        self.latest += 1;
        self.pending = true;
        self.latest
    }

    /// 読み込み完了。最新ならtrue
    pub fn finish(&mut self, stamp: ReadStamp) -> bool {
        if stamp != self.latest {
            return false;
        }
        self.pending = false;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
