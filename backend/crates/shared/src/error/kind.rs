//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum used to decide how an error is surfaced
//! to the portal user and at which level it is logged.

/// エラー種別の列挙体
///
/// ポータル上でのエラー表示方法を決めるための分類を定義します。
/// ユーザー操作に起因するもの（入力不備・認証失敗など）と、
/// 内部状態に起因するもの（データ不整合・ストレージ障害）に大別されます。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert!(!kind.is_internal());
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力が不正（空のフォーム項目など）
    BadRequest,
    /// 認証に失敗した
    Unauthorized,
    /// 対象が見つからない
    NotFound,
    /// 保存データが壊れている
    Corrupted,
    /// 内部データの不整合
    Internal,
    /// ストレージなどの基盤が利用できない
    Unavailable,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Corrupted => "Corrupted",
            ErrorKind::Internal => "Internal Error",
            ErrorKind::Unavailable => "Unavailable",
        }
    }

    /// 内部起因のエラーかどうかを判定
    ///
    /// これらのエラーはエラーレベルでログに記録すべきです。
    #[inline]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            ErrorKind::Corrupted | ErrorKind::Internal | ErrorKind::Unavailable
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
