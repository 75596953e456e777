use crate::image_classifier::interface::Classification;

/// NaN logits stay NaN so `rank` skips them. Any +inf logits share the whole
/// mass. With no finite logit left every entry is NaN.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let infinite = logits.iter().filter(|&&v| v == f32::INFINITY).count();
    if infinite > 0 {
        let share = 1.0 / infinite as f32;
        return logits
            .iter()
            .map(|&v| {
                if v.is_nan() {
                    f32::NAN
                } else if v == f32::INFINITY {
                    share
                } else {
                    0.0
                }
            })
            .collect();
    }

    let max = logits
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f32::NEG_INFINITY, f32::max);

    if max == f32::NEG_INFINITY {
        return vec![f32::NAN; logits.len()];
    }

    let exps: Vec<f32> = logits.iter().map(|&v| (v - max).exp()).collect();
    let sum: f32 = exps.iter().filter(|e| !e.is_nan()).sum();

    exps.into_iter().map(|e| e / sum).collect()
}

/// True when the scores already form a probability distribution.
pub fn is_distribution(scores: &[f32]) -> bool {
    let sum: f32 = scores.iter().sum();
    scores.iter().all(|s| (0.0..=1.0).contains(s)) && (sum - 1.0).abs() < 1e-3
}

/// Highest first; equal scores keep their index order.
pub fn rank(scores: &[f32], labels: &[String], top_k: usize) -> Vec<Classification> {
    let mut indexed: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, score)| !score.is_nan())
        .collect();

    indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
    indexed.truncate(top_k);

    indexed
        .into_iter()
        .map(|(index, score)| match labels.get(index) {
            Some(label) => Classification::new(label.clone(), score),
            None => Classification::new(format!("class {}", index), score),
        })
        .collect()
}

/// Turns raw model output into ranked classifications. Scores that already
/// form a distribution are kept, anything else goes through softmax. Some
/// exports carry an extra "background" label in front of the real classes.
pub fn classify_scores(scores: &[f32], labels: &[String], top_k: usize) -> Vec<Classification> {
    let probabilities = if is_distribution(scores) {
        scores.to_vec()
    } else {
        softmax(scores)
    };

    let labels = if labels.len() == scores.len() + 1 {
        &labels[1..]
    } else {
        labels
    };

    rank(&probabilities, labels, top_k)
}
