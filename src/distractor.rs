// ============================================
// src/distractor.rs
// ハズレ選択肢 (distractor) の抽選
// ============================================

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// `pool` から `exclude` 以外の値を重複なしで `count` 個選ぶ (一様・非復元抽出)
///
/// 候補が足りないときは、あるだけ返す (panic はしない)。
pub fn sample_wrong_answers<R: Rng + ?Sized>(
    pool: &[&'static str],
    exclude: &str,
    count: usize,
    rng: &mut R,
) -> Vec<&'static str> {
    let candidates = distinct_except(pool, &[exclude]);
    candidates.choose_multiple(rng, count).copied().collect()
}

/// 紛らわしい字を優先してハズレ選択肢を選ぶ
///
/// `curated` から先に取り、足りない分は `pool` からランダムに補充する。
pub fn pick_distractors<R: Rng + ?Sized>(
    curated: Option<&[&'static str]>,
    pool: &[&'static str],
    answer: &str,
    count: usize,
    rng: &mut R,
) -> Vec<&'static str> {
    let mut chosen = match curated {
        Some(list) => {
            let mut preferred = distinct_except(list, &[answer]);
            preferred.shuffle(rng);
            preferred.truncate(count);
            preferred
        }
        None => Vec::new(),
    };

    if chosen.len() < count {
        // 既に選んだ字を母集団から外してから補充
        let rest = distinct_except(pool, &chosen);
        let missing = count - chosen.len();
        chosen.extend(sample_wrong_answers(&rest, answer, missing, rng));
    }

    if chosen.len() < count {
        log::warn!(
            "only {} distractors available for {} (wanted {})",
            chosen.len(),
            answer,
            count
        );
    }
    chosen
}

/// 重複と `excluded` を取り除く (順序は保つ)
fn distinct_except(values: &[&'static str], excluded: &[&str]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::with_capacity(values.len());
    for v in values {
        if !excluded.contains(v) && !out.contains(v) {
            out.push(*v);
        }
    }
    out
}
