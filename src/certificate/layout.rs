//! Fixed placement table for names, flags and the tracking identifier.
//!
//! Only two participant slots exist. A single participant gets the first
//! name slot and no flags; participants past the second are not drawn.

use super::badge::BADGE_WIDTH;
use super::model::Participant;

pub const NAME_ANCHORS: [(i32, i32); 2] = [(480, 600), (1120, 600)];
pub const BADGE_MARGIN: i32 = 10;
pub const BADGE_TOP: i32 = 10;
pub const IDENTIFIER_X: i32 = 50;
pub const IDENTIFIER_BOTTOM_OFFSET: i32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPlacement {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgePlacement {
    pub country_code: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub names: Vec<TextPlacement>,
    pub badges: Vec<BadgePlacement>,
    pub identifier: TextPlacement,
}

pub fn plan(participants: &[Participant], identifier: &str, canvas: (u32, u32)) -> Layout {
    let (width, height) = (canvas.0 as i32, canvas.1 as i32);

    let names = participants
        .iter()
        .zip(NAME_ANCHORS)
        .map(|(p, (x, y))| TextPlacement {
            text: p.name.clone(),
            x,
            y,
        })
        .collect();

    let badges = match participants {
        [first, second, ..] => vec![
            BadgePlacement {
                country_code: first.citizenship.clone(),
                x: BADGE_MARGIN,
                y: BADGE_TOP,
            },
            BadgePlacement {
                country_code: second.citizenship.clone(),
                x: width - BADGE_WIDTH as i32 - BADGE_MARGIN,
                y: BADGE_TOP,
            },
        ],
        _ => Vec::new(),
    };

    Layout {
        names,
        badges,
        identifier: TextPlacement {
            text: identifier.to_string(),
            x: IDENTIFIER_X,
            y: height - IDENTIFIER_BOTTOM_OFFSET,
        },
    }
}
