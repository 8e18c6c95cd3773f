use super::config::NUM_REGIONS;

/// Bayes update of the regional target probabilities, using each region's
/// search effectiveness as the miss likelihood. Runs only on rounds where
/// nothing was found.
///
/// A zero denominator means every region was covered completely while prior
/// mass remained, which has no posterior under plain Bayes. All priors are
/// reset to 1.0 in that case, flagging every region as an equal candidate
/// instead of dividing by zero.
pub fn revise_probs(probs: &mut [f64; NUM_REGIONS], effectiveness: &[f64; NUM_REGIONS]) {
    let denom: f64 = probs
        .iter()
        .zip(effectiveness)
        .map(|(p, e)| p * (1.0 - e))
        .sum();

    if denom == 0.0 {
        *probs = [1.0; NUM_REGIONS];
        return;
    }

    for (p, e) in probs.iter_mut().zip(effectiveness) {
        *p = *p * (1.0 - e) / denom;
    }
}
