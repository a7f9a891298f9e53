use crate::models::{PartyMember, Pet};

pub struct PetTemplate {
    pub id: i64,
    pub guid: i64,
    pub name: &'static str,
    pub kind: &'static str,
}

pub struct PlayerTemplate {
    pub id: i64,
    pub guid: i64,
    pub name: &'static str,
    pub job: &'static str,
    pub pets: &'static [PetTemplate],
}

impl PlayerTemplate {
    pub fn to_member(&self) -> PartyMember {
        PartyMember {
            id: self.id,
            guid: self.guid,
            name: self.name.to_string(),
            job: self.job.to_string(),
            pets: self
                .pets
                .iter()
                .map(|pet| Pet {
                    id: pet.id,
                    guid: pet.guid,
                    name: pet.name.to_string(),
                    kind: pet.kind.to_string(),
                })
                .collect(),
        }
    }
}

pub const PET_TEMPLATE_CARBUNCLE: PetTemplate = PetTemplate {
    id: 99,
    guid: 1008,
    name: "Carbuncle",
    kind: "Pet",
};

pub const PLAYER_TEMPLATE_SAMURAI: PlayerTemplate = PlayerTemplate {
    id: 1,
    guid: 40001,
    name: "Yugiri Kanzaki",
    job: "SAM",
    pets: &[],
};

pub const PLAYER_TEMPLATE_DANCER: PlayerTemplate = PlayerTemplate {
    id: 2,
    guid: 40002,
    name: "Lyse Arden",
    job: "DNC",
    pets: &[],
};

pub const PLAYER_TEMPLATE_SUMMONER: PlayerTemplate = PlayerTemplate {
    id: 3,
    guid: 40003,
    name: "Mira Quill",
    job: "SMN",
    pets: &[PET_TEMPLATE_CARBUNCLE],
};

pub const PLAYER_TEMPLATE_ASTROLOGIAN: PlayerTemplate = PlayerTemplate {
    id: 4,
    guid: 40004,
    name: "Sera Vey",
    job: "AST",
    pets: &[],
};
