//! Static worksheet configuration, kept in sync with the frontend.
//!
//! Pure data: sections, fields, labels and the reference answers the model
//! compares against. Adding a worksheet field means adding a row here, not
//! touching the pipeline.

/// One worksheet question.
#[derive(Debug)]
pub struct Field {
    pub id: &'static str,
    pub label: &'static str,
    /// Reference answer shown to the model for comparison.
    pub example: &'static str,
}

/// A named group of questions, rendered in declaration order.
#[derive(Debug)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub fields: &'static [Field],
}

/// Answer keys must carry this prefix to be accepted at all.
pub const FIELD_PREFIX: &str = "ws_";

pub const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        label: "概要",
        fields: &[
            Field {
                id: "ws_team",
                label: "チーム・プロジェクト名",
                example: "商材開発チーム（研修スライド管理プロジェクト）",
            },
            Field {
                id: "ws_members",
                label: "メンバー構成",
                example: "6名（Git経験者1名、GitHub初心者5名）\nリーダー: 杉田\nメンバー: たから、さくもと、なかべっぷ、他2名",
            },
            Field {
                id: "ws_goal",
                label: "GitHub導入の目的",
                example: "【現状の課題】\n・研修スライド（PPTX）をローカルやGoogle Driveでバラバラに管理\n・誰がいつ何を変更したか追跡できない\n・同じファイルを複数人が編集して上書き事故が発生\n\n【導入目的】\n・変更履歴の可視化と追跡\n・チームでの同時編集を安全に行う\n・レビュープロセスの導入による品質向上",
            },
        ],
    },
    Section {
        id: "git_basics",
        label: "Git基礎設計",
        fields: &[
            Field {
                id: "ws_repo_structure",
                label: "リポジトリ構成",
                example: "モノレポ構成（1リポジトリ）\nリポジトリ名: training-slide-generator\n\n構成:\n・courses/ — 研修コースごとのスライド・資料\n・docs/ — 議事録・設計ドキュメント\n・.github/workflows/ — CI/CD設定",
            },
            Field {
                id: "ws_branch_strategy",
                label: "ブランチ戦略",
                example: "GitHub Flow ベース:\n・main: 本番（リリース済み資料）\n・dev: 開発統合ブランチ\n・feature/*: 機能開発・コンテンツ追加\n・docs/*: ドキュメント・議事録\n\ndevで統合テスト → mainにマージで本番反映",
            },
            Field {
                id: "ws_commit_rules",
                label: "コミットルール",
                example: "プレフィックス:\n・feat: 新規コンテンツ追加\n・fix: 誤字修正・内容修正\n・docs: 議事録・ドキュメント\n・refactor: 構成変更\n\n形式: feat: 第3章スライドを追加\n粒度: 1トピック1コミットを目安",
            },
        ],
    },
    Section {
        id: "team_dev",
        label: "チーム開発ルール",
        fields: &[
            Field {
                id: "ws_pr_flow",
                label: "Pull Requestのルール",
                example: "・feature/* → dev へのPRを作成\n・PRテンプレートを使用（変更内容・確認事項を記載）\n・最低1名のレビュー承認が必要\n・マージ後、featureブランチは削除",
            },
            Field {
                id: "ws_review_policy",
                label: "コードレビュー方針",
                example: "観点:\n・内容の正確性（研修資料として適切か）\n・ファイル構成の整合性\n・コミットメッセージの適切さ\n\n担当: チームメンバーの持ち回り\n期限: PR作成から24時間以内にレビュー開始",
            },
            Field {
                id: "ws_issue_management",
                label: "Issue管理",
                example: "ラベル:\n・content: コンテンツ関連\n・bug: 誤字・不具合\n・enhancement: 改善提案\n・question: 質問・相談\n\nProjectボード: カンバン形式（Todo / In Progress / Review / Done）\nテンプレート: コンテンツ追加・バグ報告",
            },
            Field {
                id: "ws_conflict_policy",
                label: "コンフリクト対応方針",
                example: "・feature作成者がコンフリクト解消の責任を持つ\n・バイナリファイル（PPTX）は事前に担当を分けて競合を予防\n・不明な場合はチームリーダーに相談\n・定期的にdevからpullして差分を小さく保つ",
            },
        ],
    },
    Section {
        id: "repo_mgmt",
        label: "リポジトリ管理",
        fields: &[
            Field {
                id: "ws_branch_protection",
                label: "ブランチ保護ルール",
                example: "main:\n・直接push禁止\n・PR必須（devからのみ）\n・レビュー1名以上の承認必須\n・branch-guard CIチェック必須\n\ndev:\n・直接push禁止\n・PR必須\n・レビュー1名以上の承認必須",
            },
            Field {
                id: "ws_gitignore",
                label: ".gitignore設計",
                example: "・.env（環境変数・秘密情報）\n・node_modules/（依存パッケージ）\n・.DS_Store（macOSシステムファイル）\n・*.log（ログファイル）\n・~$*.pptx（PowerPoint一時ファイル）",
            },
            Field {
                id: "ws_lfs",
                label: "Git LFS対象ファイル",
                example: "Git LFS対象:\n・*.pptx（PowerPointスライド）\n・*.pdf（配布資料）\n・*.xlsx（ワークシート）\n・*.zip（アーカイブ）\n\n理由: バイナリファイルはGit通常管理だと差分が肥大化するため",
            },
            Field {
                id: "ws_ci_cd",
                label: "CI/CD・自動化",
                example: "・Branch Guard: mainへのPRはdevからのみ許可（branch-guard.yml）\n・将来的に: スライドPDF自動生成、リンク切れチェック\n・Dependabot: 依存パッケージの脆弱性通知",
            },
        ],
    },
];

/// Look up a section by id.
pub fn section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// All fields across all sections, in declaration order.
pub fn fields() -> impl Iterator<Item = &'static Field> {
    SECTIONS.iter().flat_map(|s| s.fields.iter())
}

/// Number of fields across all sections.
pub fn total_field_count() -> usize {
    SECTIONS.iter().map(|s| s.fields.len()).sum()
}
