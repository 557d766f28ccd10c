pub mod assault;
pub mod economy;
pub mod light;
pub mod military;
pub mod worker;

pub use assault::{HeavyController, RangedController};
pub use economy::EconomyController;
pub use light::LightController;
pub use military::MilitaryController;
pub use worker::WorkerController;

use crate::controller::UnitController;

/// Build the default controller pipeline (6 controllers).
///
/// 1. EconomyController -- idle bases train workers on demand signals
/// 2. MilitaryController -- idle barracks train combat units
/// 3. WorkerController -- harvester/builder/rusher tasking
/// 4. LightController -- defender/attacker tasking + formation placement
/// 5. HeavyController -- attack nearest enemy
/// 6. RangedController -- attack nearest enemy
///
/// Order matters: the light controller's defender quota reads role
/// assignments made earlier in the same pass.
pub fn default_controllers() -> Vec<Box<dyn UnitController>> {
    vec![
        Box::new(EconomyController),
        Box::new(MilitaryController),
        Box::new(WorkerController),
        Box::new(LightController),
        Box::new(HeavyController),
        Box::new(RangedController),
    ]
}
