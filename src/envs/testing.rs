//! Environment testing utilities
use super::{EnvStructure, Environment, Robot, RobotEnv, SpacesMut, Step};
use crate::logging::Logger;
use crate::spaces::{BoxSpace, SampleSpace, Seeded, Space};
use crate::trajectory::TrajectoryGenerator;
use crate::{EnvError, Prng};
use ndarray::Array1;
use rand::distributions::Distribution;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

/// Run an environment with uniform random actions and check that invariants are satisfied.
///
/// The environment is reset at the start and whenever an episode ends.
pub fn check_rollout<E>(env: &mut E, num_steps: u64, seed: u64)
where
    E: Environment,
    E::ActionSpace: SampleSpace,
{
    let observation_space = env.observation_space();
    let action_space = env.action_space();
    let (min_reward, max_reward) = env.reward_range();
    let discount_factor = env.discount_factor();
    assert!(discount_factor >= 0.0);
    assert!(discount_factor <= 1.0);

    let mut rng = Prng::seed_from_u64(seed);
    let observation = env.reset_default().unwrap();
    assert!(observation_space.contains(&observation));
    for _ in 0..num_steps {
        let action = action_space.sample(&mut rng);
        let step = env.step(&action, &mut ()).unwrap();
        assert!(step.reward >= min_reward);
        assert!(step.reward <= max_reward);
        assert!(observation_space.contains(&step.observation));
        if step.done {
            let observation = env.reset_default().unwrap();
            assert!(observation_space.contains(&observation));
        }
    }
}

/// A call observed by the recording doubles.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    EnvReset {
        initial_state: Option<Array1<f64>>,
        duration: f64,
    },
    EnvStep(Array1<f64>),
    GeneratorReset,
    GetAction {
        time: f64,
        action: Array1<f64>,
    },
    GetObservation(Array1<f64>),
}

/// Shared, ordered record of calls.
#[derive(Debug, Default, Clone)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Robot that only keeps time.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ClockRobot {
    pub time: f64,
}

impl Robot for ClockRobot {
    fn time_since_reset(&self) -> f64 {
        self.time
    }
}

/// Side information of [`RecordingEnv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestInfo {
    pub num_steps: u64,
}

/// Environment whose observation is the last applied action.
///
/// Reset returns the initial state, or zeros by default.
/// Every step advances the robot clock by `time_step`.
#[derive(Debug, Clone)]
pub struct RecordingEnv {
    pub time_step: f64,
    /// Reward for every step.
    pub reward: f64,
    /// Episodes end after this many steps.
    pub done_after: Option<u64>,
    observation_space: Seeded<BoxSpace>,
    action_space: Seeded<BoxSpace>,
    robot: ClockRobot,
    state: Option<Array1<f64>>,
    num_steps: u64,
    log: CallLog,
}

impl RecordingEnv {
    pub fn new(num_motors: usize, log: CallLog) -> Self {
        Self {
            time_step: 0.01,
            reward: 0.0,
            done_after: None,
            observation_space: Seeded::new(BoxSpace::uniform(num_motors, -1.0, 1.0), 0),
            action_space: Seeded::new(BoxSpace::uniform(num_motors, -1.0, 1.0), 0),
            robot: ClockRobot::default(),
            state: None,
            num_steps: 0,
            log,
        }
    }

    /// Steps taken since the last reset.
    pub const fn num_steps(&self) -> u64 {
        self.num_steps
    }
}

impl EnvStructure for RecordingEnv {
    type ObservationSpace = Seeded<BoxSpace>;
    type ActionSpace = Seeded<BoxSpace>;

    fn observation_space(&self) -> Self::ObservationSpace {
        self.observation_space.clone()
    }
    fn action_space(&self) -> Self::ActionSpace {
        self.action_space.clone()
    }
    fn reward_range(&self) -> (f64, f64) {
        (-2.0, 2.0)
    }
    fn discount_factor(&self) -> f64 {
        0.99
    }
}

impl Environment for RecordingEnv {
    type InitialState = Array1<f64>;
    type Info = TestInfo;

    fn reset(
        &mut self,
        initial_state: Option<&Array1<f64>>,
        duration: f64,
    ) -> Result<Array1<f64>, EnvError> {
        self.log.push(Call::EnvReset {
            initial_state: initial_state.cloned(),
            duration,
        });
        let state = initial_state
            .cloned()
            .unwrap_or_else(|| Array1::zeros(self.action_space.space.len()));
        self.state = Some(state.clone());
        self.robot.time = 0.0;
        self.num_steps = 0;
        Ok(state)
    }

    fn step(
        &mut self,
        action: &Array1<f64>,
        _: &mut dyn Logger,
    ) -> Result<Step<Array1<f64>, TestInfo>, EnvError> {
        let state = self.state.as_mut().ok_or(EnvError::NotReset)?;
        self.log.push(Call::EnvStep(action.clone()));
        state.assign(action);
        self.robot.time += self.time_step;
        self.num_steps += 1;
        let done = self.done_after.map_or(false, |n| self.num_steps >= n);
        Ok(Step::new(
            state.clone(),
            self.reward,
            done,
            TestInfo {
                num_steps: self.num_steps,
            },
        ))
    }
}

impl RobotEnv for RecordingEnv {
    type Robot = ClockRobot;

    fn robot(&self) -> &ClockRobot {
        &self.robot
    }
}

impl SpacesMut for RecordingEnv {
    fn observation_space_mut(&mut self) -> &mut Seeded<BoxSpace> {
        &mut self.observation_space
    }
    fn action_space_mut(&mut self) -> &mut Seeded<BoxSpace> {
        &mut self.action_space
    }
}

/// Trajectory generator that records its calls.
///
/// Passes actions and observations through unless given a constant action.
#[derive(Debug, Clone)]
pub struct RecordingGenerator {
    log: CallLog,
    constant_action: Option<Array1<f64>>,
}

impl RecordingGenerator {
    pub const fn new(log: CallLog) -> Self {
        Self {
            log,
            constant_action: None,
        }
    }

    #[must_use]
    pub fn with_constant_action(mut self, action: Array1<f64>) -> Self {
        self.constant_action = Some(action);
        self
    }
}

impl<OS, AS> TrajectoryGenerator<OS, AS> for RecordingGenerator
where
    OS: Space<Element = Array1<f64>>,
    AS: Space<Element = Array1<f64>>,
{
    fn get_action(&mut self, time: f64, action: &Array1<f64>) -> Result<Array1<f64>, EnvError> {
        self.log.push(Call::GetAction {
            time,
            action: action.clone(),
        });
        Ok(self
            .constant_action
            .clone()
            .unwrap_or_else(|| action.clone()))
    }

    fn get_observation(&mut self, observation: Array1<f64>) -> Result<Array1<f64>, EnvError> {
        self.log.push(Call::GetObservation(observation.clone()));
        Ok(observation)
    }

    fn reset(&mut self) {
        self.log.push(Call::GeneratorReset);
    }
}
