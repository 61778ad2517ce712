use serde::Serialize;

/// 読書進捗の集計結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadingStats {
    pub total: usize,
    pub read: usize,
}

impl ReadingStats {
    /// 既読率（%）。蔵書0冊ならNone。
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.read as f64 / self.total as f64 * 100.0)
    }

    /// 小数点以下2桁の表示用文字列。
    pub fn percentage_label(&self) -> Option<String> {
        self.percentage().map(|p| format!("{p:.2}%"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_percentage() {
        let stats = ReadingStats { total: 0, read: 0 };
        assert_eq!(stats.percentage(), None);
        assert_eq!(stats.percentage_label(), None);
    }

    #[test]
    fn percentage_uses_two_decimals() {
        let stats = ReadingStats { total: 3, read: 1 };
        assert_eq!(stats.percentage_label().as_deref(), Some("33.33%"));

        let all = ReadingStats { total: 4, read: 4 };
        assert_eq!(all.percentage_label().as_deref(), Some("100.00%"));
    }
}
