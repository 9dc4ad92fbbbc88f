//! Benchmark `Environment::step` through trajectory generator wrappers.
use criterion::{
    criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion,
};
use locomotion_wrappers::envs::{
    EnvStructure, Environment, Robot, RobotEnv, Step, TrajectoryGeneratorWrapper, Wrap,
};
use locomotion_wrappers::logging::Logger;
use locomotion_wrappers::spaces::{BoxSpace, IntervalSpace};
use locomotion_wrappers::trajectory::{
    IdentityGenerator, OpenLoopSine, PhaseModulated, TrajectoryGenerator,
};
use locomotion_wrappers::{EnvError, Prng};
use ndarray::Array1;
use rand::distributions::Distribution;
use rand::SeedableRng;

const NUM_MOTORS: usize = 8;
const TIME_STEP: f64 = 0.002;

#[derive(Debug, Default, Clone, Copy)]
struct Clock(f64);

impl Robot for Clock {
    fn time_since_reset(&self) -> f64 {
        self.0
    }
}

/// Trivial robot environment: motors jump to the commanded angles.
///
/// Episodes never end.
struct HoldEnv {
    angles: Array1<f64>,
    clock: Clock,
}

impl HoldEnv {
    fn new() -> Self {
        Self {
            angles: Array1::zeros(NUM_MOTORS),
            clock: Clock::default(),
        }
    }
}

impl EnvStructure for HoldEnv {
    type ObservationSpace = BoxSpace;
    type ActionSpace = BoxSpace;

    fn observation_space(&self) -> Self::ObservationSpace {
        BoxSpace::uniform(NUM_MOTORS, -1.0, 1.0)
    }
    fn action_space(&self) -> Self::ActionSpace {
        BoxSpace::uniform(NUM_MOTORS, -1.0, 1.0)
    }
    fn reward_range(&self) -> (f64, f64) {
        (0.0, 0.0)
    }
    fn discount_factor(&self) -> f64 {
        0.99
    }
}

impl Environment for HoldEnv {
    type InitialState = Array1<f64>;
    type Info = ();

    fn reset(
        &mut self,
        initial_state: Option<&Array1<f64>>,
        _: f64,
    ) -> Result<Array1<f64>, EnvError> {
        self.angles = initial_state
            .cloned()
            .unwrap_or_else(|| Array1::zeros(NUM_MOTORS));
        self.clock = Clock::default();
        Ok(self.angles.clone())
    }

    fn step(
        &mut self,
        action: &Array1<f64>,
        _: &mut dyn Logger,
    ) -> Result<Step<Array1<f64>, ()>, EnvError> {
        self.angles.assign(action);
        self.clock.0 += TIME_STEP;
        Ok(Step::new(self.angles.clone(), 0.0, false, ()))
    }
}

impl RobotEnv for HoldEnv {
    type Robot = Clock;

    fn robot(&self) -> &Clock {
        &self.clock
    }
}

fn benchmark_step<M, G>(group: &mut BenchmarkGroup<M>, name: &str, generator: G)
where
    M: Measurement,
    G: TrajectoryGenerator<BoxSpace, BoxSpace>,
{
    let mut rng = Prng::seed_from_u64(0);
    let mut env: TrajectoryGeneratorWrapper<_, G> =
        HoldEnv::new().with_trajectory_generator(generator);
    let action_space = env.action_space();
    env.reset_default().unwrap();
    group.bench_function(name, |b| {
        b.iter(|| {
            let action = action_space.sample(&mut rng);
            env.step(&action, &mut ()).unwrap()
        })
    });
}

fn bench_wrapper_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapper_step");

    let mut rng = Prng::seed_from_u64(0);
    let mut env = HoldEnv::new();
    let action_space = env.action_space();
    env.reset_default().unwrap();
    group.bench_function("unwrapped", |b| {
        b.iter(|| {
            let action = action_space.sample(&mut rng);
            env.step(&action, &mut ()).unwrap()
        })
    });

    benchmark_step(&mut group, "identity", IdentityGenerator);
    benchmark_step(
        &mut group,
        "open_loop_sine",
        OpenLoopSine::new(0.3, 2.0, vec![0.0; NUM_MOTORS])
            .with_action_bounds(BoxSpace::uniform(NUM_MOTORS, -1.0, 1.0)),
    );
    benchmark_step(
        &mut group,
        "phase_modulated",
        PhaseModulated::new(
            BoxSpace::uniform(NUM_MOTORS, -1.0, 1.0),
            2.0,
            vec![0.0; NUM_MOTORS],
            IntervalSpace::new(-1.0, 1.0),
            IntervalSpace::new(0.0, 0.5),
            IntervalSpace::new(-0.1, 0.1),
        ),
    );
}

criterion_group!(benches, bench_wrapper_step);
criterion_main!(benches);
