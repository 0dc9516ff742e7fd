use rand::Rng;

use crate::models::PlanState;
use crate::planner::constants::{DISH_ID_LEN, DISH_ID_PREFIX};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a dish identifier such as `d_k3x9q0a`.
pub fn generate_dish_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..DISH_ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", DISH_ID_PREFIX, suffix)
}

/// Generate an identifier not already used by a dish in `state`.
pub fn new_dish_id(state: &PlanState) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id = generate_dish_id(&mut rng);
        if !state.contains_dish(&id) {
            return id;
        }
    }
}
