use std::path::Path;

use taskmd::export::{ExportOptions, render_markdown, render_text};
use taskmd::io::baseline::load_baseline;
use taskmd::model::task::Task;
use taskmd::ops::tree::{build_tree, flatten};

fn fixture_tasks() -> Vec<Task> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/tasks.json");
    load_baseline(&path).unwrap()
}

#[test]
fn markdown_export_snapshot() {
    let tasks = fixture_tasks();
    let tree = build_tree(&tasks);
    let out = render_markdown(&flatten(&tree), &ExportOptions::default());
    insta::assert_snapshot!(out, @r"
## T-100: API設計
> 認証まわりを先行
- **ステータス**: 進行中
- **優先度**: 今すぐ重要
- **開始日**: 2024/04/01
- **期限**: 2024/04/30
- **担当者**: sato
---

###  T-101: スキーマ定義
- **ステータス**: 未着手
- **優先度**: 計画内重要
---

## T-102: 旧APIの棚卸し
> 廃止対象を洗い出す
- **ステータス**: 完了
- **優先度**: 余裕があれば
- **担当者**: tanaka
    ");
}

#[test]
fn text_export_snapshot() {
    let tasks = fixture_tasks();
    let tree = build_tree(&tasks);
    let out = render_text("proj-alpha", &flatten(&tree), &ExportOptions::default());
    insta::assert_snapshot!(out, @r"
■proj-alpha
・API設計 【進行中】 2024/04/01-2024/04/30 担当: sato
　⇒認証まわりを先行
　・スキーマ定義 【未着手】
・旧APIの棚卸し 【完了】 担当: tanaka
　⇒廃止対象を洗い出す
    ");
}
