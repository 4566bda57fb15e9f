pub type Score = f64;

pub const MIN_SCORE: Score = 0.0;
pub const MAX_SCORE: Score = 100.0;

pub fn clamp_score(raw: Score) -> Score {
    if raw.is_nan() {
        return MIN_SCORE;
    }
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

pub fn round2(score: Score) -> Score {
    (score * 100.0).round() / 100.0
}
