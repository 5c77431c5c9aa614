/// エントリ単位の処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// 成功
    Succeeded,

    /// 対象外としてスキップ（全体の成否には影響しない）
    Skipped { reason: String },

    /// 失敗（全体を失敗にする）
    Failed { error: String },
}

/// 1エントリの記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    /// エントリ名（cloneではURL、pull/switchではディレクトリ名）
    pub name: String,

    pub outcome: EntryOutcome,
}

/// 操作全体の結果
///
/// 途中で失敗しても残りのエントリは処理され、全て記録される。
/// 終了コードは [`OperationReport::is_success`] に集約される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationReport {
    /// 処理順のエントリ記録
    pub entries: Vec<EntryReport>,
}

impl OperationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, name: impl Into<String>) {
        self.record(name, EntryOutcome::Succeeded);
    }

    pub fn record_skipped(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.record(
            name,
            EntryOutcome::Skipped {
                reason: reason.into(),
            },
        );
    }

    pub fn record_failure(&mut self, name: impl Into<String>, error: impl Into<String>) {
        self.record(
            name,
            EntryOutcome::Failed {
                error: error.into(),
            },
        );
    }

    fn record(&mut self, name: impl Into<String>, outcome: EntryOutcome) {
        self.entries.push(EntryReport {
            name: name.into(),
            outcome,
        });
    }

    /// 失敗したエントリが1つもなければ成功
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn succeeded_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Succeeded))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Skipped { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Failed { .. }))
    }

    /// 失敗したエントリ名の一覧
    pub fn failed_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, EntryOutcome::Failed { .. }))
            .map(|e| e.name.as_str())
            .collect()
    }

    fn count(&self, predicate: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.outcome)).count()
    }
}
