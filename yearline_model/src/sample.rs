// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in sample dataset, substituted when data acquisition fails.

use alloc::string::String;
use alloc::vec::Vec;

use crate::record::{RawRow, YearField};

fn row(year: i64, category: &str, name: &str, attribution: &str, title: &str, description: &str) -> RawRow {
    RawRow {
        year: Some(YearField::Number(year)),
        category: Some(String::from(category)),
        name: Some(String::from(name)),
        attribution: Some(String::from(attribution)),
        title: Some(String::from(title)),
        description: Some(String::from(description)),
    }
}

/// The built-in fallback dataset.
///
/// A small set of biographical events (architects, an artist, a scientist)
/// used when every configured source fails to load, so the timeline always
/// has something to render alongside the failure notice.
#[must_use]
pub fn sample_rows() -> Vec<RawRow> {
    alloc::vec![
        row(1867, "birth", "フランク・ロイド・ライト", "architect", "フランク・ロイド・ライト誕生", "アメリカ合衆国ウィスコンシン州で生まれる"),
        row(1887, "building", "フランク・ロイド・ライト", "architect", "ユニティ・テンプル", "シカゴ郊外オークパークに建設された初期の代表作"),
        row(1910, "publication", "フランク・ロイド・ライト", "architect", "オーガニック・アーキテクチャ", "建築の原理に関する著書"),
        row(1916, "building", "フランク・ロイド・ライト", "architect", "帝国ホテル", "東京に建設され、関東大震災にも耐えたホテル建築"),
        row(1936, "building", "フランク・ロイド・ライト", "architect", "落水荘（カウフマン邸）", "ペンシルバニア州の滝の上に建つ名作住宅"),
        row(1959, "death", "フランク・ロイド・ライト", "architect", "フランク・ロイド・ライト死去", "91歳でアリゾナ州フェニックスにて死去"),
        row(1887, "birth", "ル・コルビュジエ", "architect", "ル・コルビュジエ誕生", "スイスのラ・ショー・ド・フォンで生まれる"),
        row(1923, "publication", "ル・コルビュジエ", "architect", "建築をめざして", "モダニズム建築の原則を示した著作"),
        row(1928, "building", "ル・コルビュジエ", "architect", "サヴォア邸", "パリ郊外ポワシーに建つモダニズム住宅の傑作"),
        row(1952, "building", "ル・コルビュジエ", "architect", "ロンシャン礼拝堂", "フランスのロンシャンに建つ曲線的な形態の教会"),
        row(1965, "death", "ル・コルビュジエ", "architect", "ル・コルビュジエ死去", "フランス・コートダジュールの海で水浴中に死去"),
        row(1853, "birth", "ゴッホ", "artist", "ゴッホ誕生", "オランダのズンデルトで生まれる"),
        row(1888, "artwork", "ゴッホ", "artist", "ひまわり", "最も有名な静物画シリーズの制作"),
        row(1889, "artwork", "ゴッホ", "artist", "星月夜", "サン＝レミ＝ド＝プロヴァンスの精神病院から見た風景"),
        row(1890, "death", "ゴッホ", "artist", "ゴッホ死去", "37歳でフランスのオーヴェル＝シュル＝オワーズにて自ら命を絶つ"),
        row(1879, "birth", "アインシュタイン", "scientist", "アインシュタイン誕生", "ドイツのウルムで生まれる"),
        row(1905, "publication", "アインシュタイン", "scientist", "特殊相対性理論の発表", "「運動物体の電気力学について」を発表"),
        row(1915, "publication", "アインシュタイン", "scientist", "一般相対性理論の発表", "重力を時空の歪みとして説明する革命的理論"),
        row(1921, "discovery", "アインシュタイン", "scientist", "ノーベル物理学賞受賞", "光電効果の理論的解明に対して授与"),
        row(1955, "death", "アインシュタイン", "scientist", "アインシュタイン死去", "76歳でアメリカのプリンストンにて死去"),
    ]
}
