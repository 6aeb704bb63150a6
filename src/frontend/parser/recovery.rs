/// Grammar positions where the parser can meet a token it cannot use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryContext {
    /// A specific terminal was required (`match`).
    Match,
    /// No statement production starts with the lookahead.
    Statement,
    /// No factor production starts with the lookahead.
    Factor,
}

/// What happens to the offending token after it has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Keep the token as lookahead so the enclosing production can
    /// reinterpret it.
    ReportAndKeep,
    /// Advance past the token. Guarantees forward progress.
    ReportAndDiscard,
}

pub fn policy_for(context: RecoveryContext) -> RecoveryPolicy {
    match context {
        RecoveryContext::Match => RecoveryPolicy::ReportAndKeep,
        RecoveryContext::Statement | RecoveryContext::Factor => RecoveryPolicy::ReportAndDiscard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_keeps_the_token() {
        assert_eq!(policy_for(RecoveryContext::Match), RecoveryPolicy::ReportAndKeep);
    }

    #[test]
    fn test_default_cases_discard_the_token() {
        assert_eq!(policy_for(RecoveryContext::Statement), RecoveryPolicy::ReportAndDiscard);
        assert_eq!(policy_for(RecoveryContext::Factor), RecoveryPolicy::ReportAndDiscard);
    }
}
