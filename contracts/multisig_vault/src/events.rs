//! One event per state transition, topic pair `(verb, queue)`.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::{Action, Queue};

fn queue_topic(queue: Queue) -> Symbol {
    match queue {
        Queue::Transfer => symbol_short!("transfer"),
        Queue::OwnerChange => symbol_short!("owner"),
        Queue::Threshold => symbol_short!("threshold"),
    }
}

pub fn submitted(env: &Env, queue: Queue, by: &Address, index: u32, action: &Action) {
    env.events().publish(
        (symbol_short!("submit"), queue_topic(queue)),
        (by.clone(), index, action.clone()),
    );
}

pub fn confirmed(env: &Env, queue: Queue, by: &Address, index: u32) {
    env.events()
        .publish((symbol_short!("confirm"), queue_topic(queue)), (by.clone(), index));
}

pub fn revoked(env: &Env, queue: Queue, by: &Address, index: u32) {
    env.events()
        .publish((symbol_short!("revoke"), queue_topic(queue)), (by.clone(), index));
}

pub fn executed(env: &Env, queue: Queue, by: &Address, index: u32) {
    env.events()
        .publish((symbol_short!("execute"), queue_topic(queue)), (by.clone(), index));
}
