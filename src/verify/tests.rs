//! Tests for the verification pipeline's stage checks and result types.

use crate::config::ContentRule;
use crate::verify::content::evaluate_rule;
use crate::verify::result::{Stage, StageResult, VerifyOutcome};
use crate::verify::structure::missing_structures;

fn stat_rule(target: &str, expected: &str) -> ContentRule {
    ContentRule::StatMatch {
        target: target.to_string(),
        expected: expected.to_string(),
    }
}

// ============================================================================
// 1. CONTENT RULE TESTS
// ============================================================================

#[test]
fn test_stat_match_passes_on_exact_value() {
    let content = "## 执行摘要\n总用户数：1000\n";
    let rule = stat_rule("总用户数：", "1000");

    assert!(evaluate_rule(content, &rule).is_ok());
}

#[test]
fn test_stat_match_fails_on_decimal_variant() {
    // "1000.5" is extracted as the full token and compared as text.
    let content = "总用户数：1000.5\n";
    let rule = stat_rule("总用户数：", "1000");

    assert!(evaluate_rule(content, &rule).is_err());
}

#[test]
fn test_stat_match_compares_text_not_value() {
    // String comparison: "1000" is not "1000.0" even though the values are
    // numerically equal.
    let content = "总用户数：1000\n";
    let rule = stat_rule("总用户数：", "1000.0");

    assert!(evaluate_rule(content, &rule).is_err());
}

#[test]
fn test_stat_match_uses_first_matching_line() {
    let content = "总用户数：999\n总用户数：1000\n";
    let rule = stat_rule("总用户数：", "1000");

    assert!(evaluate_rule(content, &rule).is_err());
}

#[test]
fn test_stat_match_fails_when_target_absent() {
    let content = "活跃用户：1000\n";
    let rule = stat_rule("总用户数：", "1000");

    assert!(evaluate_rule(content, &rule).is_err());
}

#[test]
fn test_regex_match_finds_date() {
    let content = "报告日期: 2024-05-01\n";
    let rule = ContentRule::RegexMatch {
        target: "报告日期".to_string(),
        expected: r"\d{4}-\d{2}-\d{2}".to_string(),
    };

    assert!(evaluate_rule(content, &rule).is_ok());
}

#[test]
fn test_regex_match_fails_without_date() {
    let content = "报告日期: 未填写\n";
    let rule = ContentRule::RegexMatch {
        target: "报告日期".to_string(),
        expected: r"\d{4}-\d{2}-\d{2}".to_string(),
    };

    let err = evaluate_rule(content, &rule).unwrap_err();
    assert!(err.contains("报告日期"));
}

#[test]
fn test_invalid_regex_fails_rule_not_run() {
    let rule = ContentRule::RegexMatch {
        target: "broken".to_string(),
        expected: "(unclosed".to_string(),
    };

    let err = evaluate_rule("anything", &rule).unwrap_err();
    assert!(err.contains("invalid pattern"));
}

#[test]
fn test_text_match_literal_substring() {
    let content = "状态栏\n审核状态：已批准\n";
    let rule = ContentRule::TextMatch {
        target: "审核状态".to_string(),
        expected: "审核状态：已批准".to_string(),
    };

    assert!(evaluate_rule(content, &rule).is_ok());
}

#[test]
fn test_text_match_fails_on_partial_text() {
    let content = "审核状态：待审核\n";
    let rule = ContentRule::TextMatch {
        target: "审核状态".to_string(),
        expected: "审核状态：已批准".to_string(),
    };

    assert!(evaluate_rule(content, &rule).is_err());
}

// ============================================================================
// 2. STRUCTURE TESTS
// ============================================================================

#[test]
fn test_structure_failure_enumerates_all_missing() {
    let content = "# 项目分析报告\n## 执行摘要\n";
    let required = vec![
        "# 项目分析报告".to_string(),
        "## 执行摘要".to_string(),
        "## 详细分析".to_string(),
        "| 指标 | 数值 |".to_string(),
        "## 结论".to_string(),
    ];

    let missing = missing_structures(content, &required);
    assert_eq!(missing, vec!["## 详细分析", "| 指标 | 数值 |", "## 结论"]);
}

// ============================================================================
// 3. RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_stage_labels_and_ordinals() {
    assert_eq!(Stage::FileExists.ordinal(), 1);
    assert_eq!(Stage::Structure.ordinal(), 2);
    assert_eq!(Stage::Content.ordinal(), 3);
    assert_eq!(Stage::CommitRecord.ordinal(), 4);
    assert_eq!(Stage::FileExists.label(), "file existence");
    assert_eq!(Stage::CommitRecord.label(), "commit record");
}

#[test]
fn test_stage_result_summary() {
    let result = StageResult::fail(Stage::Structure, "Missing required structures: ## 结论");

    let summary = result.summary();
    assert!(summary.contains("FAILED"));
    assert!(summary.contains("file structure"));
    assert!(summary.contains("## 结论"));
}

#[test]
fn test_outcome_all_passed() {
    let outcome = VerifyOutcome::AllPassed {
        stages: vec![
            StageResult::pass(Stage::FileExists, "ok"),
            StageResult::pass(Stage::Structure, "ok"),
        ],
    };

    assert!(outcome.all_passed());
    assert_eq!(outcome.passed_count(), 2);
    assert!(outcome.failures().is_empty());
}

#[test]
fn test_outcome_failed_carries_failures() {
    let outcome = VerifyOutcome::Failed {
        stages: vec![
            StageResult::pass(Stage::FileExists, "ok"),
            StageResult::fail(Stage::Structure, "missing ## 结论"),
        ],
        failures: vec!["missing ## 结论".to_string()],
    };

    assert!(!outcome.all_passed());
    assert_eq!(outcome.passed_count(), 1);
    assert_eq!(outcome.stages().len(), 2);
    assert_eq!(outcome.failures(), vec!["missing ## 结论"]);
}
