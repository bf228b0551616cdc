use rand::seq::SliceRandom;
use rand::Rng;

pub const CAPTIONS: [&str; 4] = ["Let's meetup at: ", "Next event:", "Upcoming:", "Next up: "];

pub fn choose_caption<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CAPTIONS.choose(rng).copied().unwrap_or(CAPTIONS[0])
}

pub fn random_caption() -> &'static str {
    choose_caption(&mut rand::thread_rng())
}
