use hashbrown::HashMap;
use serde::Serialize;

use crate::utils::split_pascal_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JobId {
    Pld, War, Drk, Gnb,
    Whm, Sch, Ast,
    Brd, Mch, Dnc,
    Mnk, Drg, Nin, Sam,
    Blm, Smn, Rdm, Blu,
    Crp, Bsm, Arm, Gsm, Wvr, Ltw, Alc, Cul,
    Btn, Min, Fsh,
    Eureka,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobDiscipline {
    DiscipleOfWar,
    DiscipleOfMagic,
    DiscipleOfHand,
    DiscipleOfLand,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobCombatCategory {
    NotApplicable,
    Tank,
    Healer,
    DpsMelee,
    DpsRanged,
    DpsMagic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Job {
    pub id: JobId,
    pub name_short: &'static str,
    pub name_en: &'static str,
    pub class_en: &'static str,
    pub max_level: u8,
    pub discipline: JobDiscipline,
    pub category: JobCombatCategory,
}

const fn job(
    id: JobId,
    name_short: &'static str,
    name_en: &'static str,
    class_en: &'static str,
    max_level: u8,
    discipline: JobDiscipline,
    category: JobCombatCategory,
) -> Job {
    Job { id, name_short, name_en, class_en, max_level, discipline, category }
}

use JobCombatCategory as C;
use JobDiscipline as D;

pub const JOBS: [Job; 30] = [
    job(JobId::Pld, "PLD", "Paladin", "Gladiator", 80, D::DiscipleOfWar, C::Tank),
    job(JobId::War, "WAR", "Warrior", "Marauder", 80, D::DiscipleOfWar, C::Tank),
    job(JobId::Drk, "DRK", "Dark Knight", "Dark Knight", 80, D::DiscipleOfWar, C::Tank),
    job(JobId::Gnb, "GNB", "Gunbreaker", "Gunbreaker", 80, D::DiscipleOfWar, C::Tank),
    job(JobId::Whm, "WHM", "White Mage", "Conjurer", 80, D::DiscipleOfMagic, C::Healer),
    job(JobId::Sch, "SCH", "Scholar", "Arcanist", 80, D::DiscipleOfMagic, C::Healer),
    job(JobId::Ast, "AST", "Astrologian", "Astrologian", 80, D::DiscipleOfMagic, C::Healer),
    job(JobId::Brd, "BRD", "Bard", "Archer", 80, D::DiscipleOfWar, C::DpsRanged),
    job(JobId::Mch, "MCH", "Machinist", "Machinist", 80, D::DiscipleOfWar, C::DpsRanged),
    job(JobId::Dnc, "DNC", "Dancer", "Dancer", 80, D::DiscipleOfWar, C::DpsRanged),
    job(JobId::Mnk, "MNK", "Monk", "Pugilist", 80, D::DiscipleOfWar, C::DpsMelee),
    job(JobId::Drg, "DRG", "Dragoon", "Lancer", 80, D::DiscipleOfWar, C::DpsMelee),
    job(JobId::Nin, "NIN", "Ninja", "Rogue", 80, D::DiscipleOfWar, C::DpsMelee),
    job(JobId::Sam, "SAM", "Samurai", "Samurai", 80, D::DiscipleOfWar, C::DpsMelee),
    job(JobId::Blm, "BLM", "Black Mage", "Thaumaturge", 80, D::DiscipleOfMagic, C::DpsMagic),
    job(JobId::Smn, "SMN", "Summoner", "Arcanist", 80, D::DiscipleOfMagic, C::DpsMagic),
    job(JobId::Rdm, "RDM", "Red Mage", "Red Mage", 80, D::DiscipleOfMagic, C::DpsMagic),
    job(JobId::Blu, "BLU", "Blue Mage", "Blue Mage", 60, D::DiscipleOfMagic, C::DpsMagic),
    job(JobId::Crp, "CRP", "Carpenter", "Carpenter", 80, D::DiscipleOfHand, C::NotApplicable),
    job(JobId::Bsm, "BSM", "Blacksmith", "Blacksmith", 80, D::DiscipleOfHand, C::NotApplicable),
    job(JobId::Arm, "ARM", "Armorer", "Armorer", 80, D::DiscipleOfHand, C::NotApplicable),
    job(JobId::Gsm, "GSM", "Goldsmith", "Goldsmith", 80, D::DiscipleOfHand, C::NotApplicable),
    job(JobId::Wvr, "WVR", "Weaver", "Weaver", 80, D::DiscipleOfHand, C::NotApplicable),
    job(JobId::Ltw, "LTW", "Leatherworker", "Leatherworker", 80, D::DiscipleOfHand, C::NotApplicable),
    job(JobId::Alc, "ALC", "Alchemist", "Alchemist", 80, D::DiscipleOfHand, C::NotApplicable),
    job(JobId::Cul, "CUL", "Culinarian", "Culinarian", 80, D::DiscipleOfHand, C::NotApplicable),
    job(JobId::Btn, "BTN", "Botanist", "Botanist", 80, D::DiscipleOfLand, C::NotApplicable),
    job(JobId::Min, "MIN", "Miner", "Miner", 80, D::DiscipleOfLand, C::NotApplicable),
    job(JobId::Fsh, "FSH", "Fisher", "Fisher", 80, D::DiscipleOfLand, C::NotApplicable),
    job(JobId::Eureka, "EUREKA", "Elemental Level", "Elemental Level", 60, D::Other, C::NotApplicable),
];

/// Immutable job lookup, built once and handed to whoever resolves job names.
#[derive(Debug, Clone)]
pub struct JobTable {
    by_id: HashMap<JobId, Job>,
    by_short: HashMap<&'static str, Job>,
    by_name: HashMap<&'static str, Job>,
}

impl JobTable {
    pub fn new() -> Self {
        let mut by_id = HashMap::new();
        let mut by_short = HashMap::new();
        let mut by_name = HashMap::new();

        for job in JOBS {
            by_id.insert(job.id, job);
            by_short.insert(job.name_short, job);
            by_name.insert(job.name_en, job);
        }

        // class names never shadow a job name, a shared class resolves to the last job
        for job in JOBS {
            if JOBS.iter().any(|other| other.name_en == job.class_en && other.id != job.id) {
                continue;
            }
            by_name.insert(job.class_en, job);
        }

        Self { by_id, by_short, by_name }
    }

    pub fn by_id(&self, id: JobId) -> Option<&Job> {
        self.by_id.get(&id)
    }

    pub fn by_short(&self, short: &str) -> Option<&Job> {
        self.by_short.get(short)
    }

    pub fn by_name(&self, name: &str) -> Option<&Job> {
        self.by_name.get(name)
    }

    /// Resolves a PascalCase actor type such as `DarkKnight`.
    pub fn resolve_type(&self, actor_type: &str) -> Option<&Job> {
        self.by_name(&split_pascal_case(actor_type))
    }
}

impl Default for JobTable {
    fn default() -> Self {
        Self::new()
    }
}
