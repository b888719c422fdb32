//! System prompts and prompt rendering for the feedback engine.
//!
//! Rendering is pure and deterministic: the same answer set always yields a
//! byte-identical prompt.

use crate::sanitize::AnswerSet;
use crate::worksheet::{self, Section};

/// Shown in place of an answer the learner left empty.
const UNANSWERED: &str = "(未記入)";

/// System prompt for single-section feedback.
pub const SECTION_SYSTEM_PROMPT: &str = r#"あなたはGitHub研修の講師アシスタントです。受講者がワークシートに記入したGitHub運用設計の回答に対して、建設的なフィードバックを日本語で提供してください。

## フィードバックの方針
- 受講者を励ましながら、具体的な改善点を指摘する
- 良い点を最初に挙げてから、改善点を提案する
- 研修で学んだ内容（Git基礎、ブランチ戦略、PR、コードレビュー、Issue管理など）に関連づけてフィードバックする
- 回答が空欄の場合は記入を促す
- 回答例はあくまで参考であり、受講者のチーム状況に応じた回答も正解であることを考慮する

## 回答フォーマット
各フィールドについて1-3文で簡潔にフィードバックし、セクション全体の総評を最後に1-2文で記載してください。
フィールド名は【】で囲んでください。"#;

/// System prompt for whole-worksheet feedback.
pub const OVERALL_SYSTEM_PROMPT: &str = r#"あなたはGitHub研修の講師アシスタントです。受講者がワークシート全体（4セクション・14項目）に記入したGitHub運用設計の回答に対して、総合的なフィードバックを日本語で提供してください。

## フィードバックの方針
- まず全体の完成度と充実度を評価する
- 各セクション（概要、Git基礎設計、チーム開発ルール、リポジトリ管理）ごとに1-2文で評価する
- セクション間の一貫性を確認する（例：ブランチ戦略とPRルールが整合しているか）
- 実際の運用で特に注意すべきポイントを2-3点挙げる
- 全体を通しての改善アドバイスを記載する
- 受講者を励まし、次のステップ（実際にリポジトリを作って運用を開始するなど）を提案する

## 回答フォーマット
以下の構成でフィードバックを記載してください：
1. 全体評価（2-3文）
2. セクション別評価（各1-2文）
3. 一貫性チェック（2-3文）
4. 改善アドバイス（2-3点）
5. 次のステップ（1-2文）"#;

/// Render the user prompt for single-section feedback.
pub fn build_section_prompt(section: &Section, answers: &AnswerSet) -> String {
    let mut prompt = format!("## セクション: {}\n\n", section.label);
    prompt.push_str("### 受講者の回答:\n");
    push_answer_block(&mut prompt, section, answers);
    prompt.push_str("### 参考回答例:\n");
    push_example_block(&mut prompt, section);
    prompt.push_str("上記の受講者の回答を参考回答例と比較し、フィードバックを提供してください。");
    prompt
}

/// Render the user prompt for whole-worksheet feedback, one block per
/// section in declared order.
pub fn build_overall_prompt(answers: &AnswerSet) -> String {
    let mut prompt = String::from("## GitHub運用設計ワークシート全体\n\n");
    for section in worksheet::SECTIONS {
        prompt.push_str(&format!("### {}\n", section.label));
        prompt.push_str("#### 受講者の回答:\n");
        push_answer_block(&mut prompt, section, answers);
        prompt.push_str("#### 参考回答例:\n");
        push_example_block(&mut prompt, section);
    }
    prompt.push_str("上記のワークシート全体を評価し、総合フィードバックを提供してください。");
    prompt
}

fn push_answer_block(prompt: &mut String, section: &Section, answers: &AnswerSet) {
    for field in section.fields {
        let answer = match answers.get(field.id) {
            Some(text) if !text.is_empty() => text.as_str(),
            _ => UNANSWERED,
        };
        prompt.push_str(&format!("【{}】\n{}\n\n", field.label, answer));
    }
}

fn push_example_block(prompt: &mut String, section: &Section) {
    for field in section.fields {
        prompt.push_str(&format!("【{}】\n{}\n\n", field.label, field.example));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_section_prompt_is_deterministic() {
        let section = worksheet::section("team_dev").unwrap();
        let set = answers(&[("ws_pr_flow", "feature → dev, 1 approval")]);
        assert_eq!(
            build_section_prompt(section, &set),
            build_section_prompt(section, &set)
        );
    }

    #[test]
    fn test_overall_prompt_is_deterministic() {
        let set = answers(&[("ws_team", "alpha"), ("ws_gitignore", ".env")]);
        assert_eq!(build_overall_prompt(&set), build_overall_prompt(&set));
    }

    #[test]
    fn test_section_prompt_lists_each_label_twice() {
        let section = worksheet::section("git_basics").unwrap();
        let set = answers(&[("ws_branch_strategy", "GitHub Flow")]);
        let prompt = build_section_prompt(section, &set);
        for field in section.fields {
            let needle = format!("【{}】", field.label);
            // Once in the answer block, once in the reference block.
            assert_eq!(prompt.matches(&needle).count(), 2, "label {}", field.label);
        }
    }

    #[test]
    fn test_blank_answers_render_placeholder() {
        let section = worksheet::section("overview").unwrap();
        let prompt = build_section_prompt(section, &HashMap::new());
        assert_eq!(
            prompt.matches(UNANSWERED).count(),
            section.fields.len()
        );
    }

    #[test]
    fn test_filled_answer_replaces_placeholder() {
        let section = worksheet::section("overview").unwrap();
        let set = answers(&[("ws_team", "商材開発チーム")]);
        let prompt = build_section_prompt(section, &set);
        assert!(prompt.contains("商材開発チーム"));
        assert_eq!(prompt.matches(UNANSWERED).count(), section.fields.len() - 1);
    }

    #[test]
    fn test_overall_prompt_covers_every_section_in_order() {
        let prompt = build_overall_prompt(&HashMap::new());
        let mut last = 0;
        for section in worksheet::SECTIONS {
            let header = format!("### {}\n", section.label);
            let pos = prompt[last..]
                .find(&header)
                .unwrap_or_else(|| panic!("missing header for {}", section.id));
            last += pos;
        }
        assert!(prompt.ends_with("総合フィードバックを提供してください。"));
    }
}
