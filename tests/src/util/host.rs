use forfeit::clock::ManualClock;
use forfeit::configuration::Configuration;
use forfeit::test_util::FakeHost;
use forfeit::{Coordinator, CoordinatorHandle, CoordinatorService};
use forfeit_common::types::Team;

/// Client ids of the red players, in join order.
pub const RED: [u64; 4] = [1, 2, 3, 4];
/// Client ids of the blue players, in join order.
pub const BLUE: [u64; 2] = [11, 12];

/// A match with four red and two blue players at the given score.
pub fn match_at(red_score: u32, blue_score: u32) -> FakeHost {
    let host = FakeHost::playing(red_score, blue_score);
    for (i, id) in RED.iter().enumerate() {
        host.join(*id, &format!("red{}", i + 1), Team::Red);
    }
    for (i, id) in BLUE.iter().enumerate() {
        host.join(*id, &format!("blue{}", i + 1), Team::Blue);
    }
    host
}

/// Starts a coordinator service for `host` on the current runtime.
pub fn spawn(host: &FakeHost) -> (CoordinatorHandle, ManualClock) {
    let clock = ManualClock::default();
    let coordinator = Coordinator::with_clock(host.clone(), clock.clone());
    (CoordinatorService::new(coordinator).spawn(), clock)
}

/// Like [`spawn`], with every setting taken from `conf`.
pub fn spawn_with(host: &FakeHost, conf: &Configuration) -> (CoordinatorHandle, ManualClock) {
    let clock = ManualClock::default();
    let coordinator =
        Coordinator::with_clock(host.clone(), clock.clone()).conf(conf.vote.clone());
    (
        CoordinatorService::with_conf(coordinator, &conf.service).spawn(),
        clock,
    )
}
