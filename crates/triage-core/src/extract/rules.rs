//! Per-category slot extraction cascades.
//!
//! Each category owns an ordered list of independent rules. A rule pairs
//! a search pattern with a target slot and, for red-flag findings, an
//! urgency trigger. Rule order is load-bearing: later rules overwrite
//! earlier urgency levels when both fire on one utterance.

use regex::Regex;

use crate::models::{Category, Urgency};

/// One extraction rule: pattern → slot, with an optional red-flag check.
pub(crate) struct SlotRule {
    pub pattern: Regex,
    pub slot: &'static str,
    pub trigger: Option<UrgencyTrigger>,
}

/// Escalation attached to a rule. Fires only when the rule's own match
/// is unnegated and the probe (if any) matches anywhere in the text.
pub(crate) struct UrgencyTrigger {
    pub probe: Option<Regex>,
    pub level: Urgency,
    pub alert: &'static str,
}

/// Vocabulary check that switches the conversation to another category.
pub(crate) struct RedirectProbe {
    pub pattern: Regex,
    pub target: Category,
}

fn rule(pattern: &str, slot: &'static str) -> SlotRule {
    SlotRule {
        pattern: Regex::new(pattern).expect("extraction pattern is valid"),
        slot,
        trigger: None,
    }
}

fn flagged(
    pattern: &str,
    slot: &'static str,
    probe: Option<&str>,
    level: Urgency,
    alert: &'static str,
) -> SlotRule {
    SlotRule {
        pattern: Regex::new(pattern).expect("extraction pattern is valid"),
        slot,
        trigger: Some(UrgencyTrigger {
            probe: probe.map(|p| Regex::new(p).expect("probe pattern is valid")),
            level,
            alert,
        }),
    }
}

pub(crate) fn gastro_rules() -> Vec<SlotRule> {
    vec![
        rule(r"(vomit|nausea|puke|throw up|queasy|dry heave)", "vomiting"),
        rule(r"(diarrhea|constipation|poop|stool|loose|runny)", "bowel"),
        rule(r"(bloat|gas|fart|fullness|air|burp)", "bloating"),
        rule(r"(ate|food|meal|restaurant|spicy|oily|sushi|chicken)", "triggers"),
        flagged(
            r"(blood|red|black|tar|dark stool|coffee)",
            "stool_color",
            None,
            Urgency::Critical,
            "possible GI bleed",
        ),
        rule(r"(water|drink|thirsty|dry mouth|pee|urine)", "hydration"),
    ]
}

pub(crate) fn respiratory_rules() -> Vec<SlotRule> {
    vec![
        rule(r"(sudden|slow|gradual|rest|walk|run|exercise|exert)", "onset"),
        rule(r"(wheeze|whistle|gasp|squeak|noisy|stridor)", "sounds"),
        rule(r"(dry|wet|hack|tickle|productive|bark)", "type"),
        flagged(
            r"(mucus|phlegm|sputum|spit|green|yellow|clear|blood|red|pink)",
            "sputum",
            Some(r"(blood|red|pink)"),
            Urgency::Critical,
            "hemoptysis",
        ),
        rule(r"(fever|hot|temp|chill|shiver|sweat|ache|weak)", "systemic"),
        rule(r"(hurt|pain|stab|sharp|rib|burn)", "pain"),
        rule(r"(dust|pollen|cat|dog|pet|smoke|weather|season)", "triggers"),
        rule(r"(stuff|block|full|clog|drip)", "congestion"),
    ]
}

pub(crate) fn neuro_rules() -> Vec<SlotRule> {
    vec![
        rule(r"(front|back|side|temple|forehead|skull|left|right|spot|all over)", "location"),
        rule(
            r"(nausea|sick|vomit|puke|light|bright|sound|noise|loud|eye hurt)",
            "associated_symptoms",
        ),
        rule(r"(spin|room|round|lightheaded|woozy|faint|unsteady|balance|fall)", "sensation"),
        rule(r"(stand|up|rise|bed|roll|turn|move head|lying)", "triggers"),
        rule(r"(ring|buzz|ear|full|pop|muffle|hear|tinnitus)", "ears"),
        rule(r"(blur|double|blind|curtain|dark|see|focus|fog)", "clarity"),
        rule(r"(flash|spot|zig|zag|line|star|halo|spark)", "disturbances"),
        rule(r"(sudden|instant|gradual|slow|woke up)", "onset"),
        rule(r"(black|faint|pass out|floor|wake|remember|conscious)", "event"),
        rule(r"(aura|smell|sweat|hot|nausea|dizzy before)", "warning"),
        rule(r"(confuse|tired|sleepy|bite|tongue|wet|urine|sore)", "aftermath"),
        rule(r"(numb|tingle|weak|pin|needle|feel|arm|leg|face|droop)", "weakness"),
        rule(r"(speak|slur|word|talk|understand|confuse|memory|disorient)", "cognition"),
        rule(r"(stroke|seizure|epilepsy|medication|drug|history|before)", "history"),
    ]
}

pub(crate) fn ortho_rules() -> Vec<SlotRule> {
    vec![
        rule(r"(shoot|leg|arm|travel|down|radiate|electric|shock)", "radiation"),
        rule(r"(numb|groin|butt|bladder|bowel|toilet|control)", "numbness"),
        rule(r"(lock|stuck|click|grind|pop|noise|crunch)", "sounds"),
        rule(r"(swell|swollen|puff|red|hot|warm|fluid|balloon)", "swelling"),
        rule(r"(fall|fell|trip|hit|twist|land|crush|accident)", "mechanism"),
        rule(r"(walk|stand|weight|move|step|lift)", "function"),
        flagged(
            r"(bent|crooked|shape|bone|sticking|out|deformed|angle)",
            "deformity",
            Some(r"(bone sticking|bone out|white|open wound)"),
            Urgency::Critical,
            "possible compound fracture",
        ),
        rule(r"(type|computer|morning|first step|walk|run|shoe)", "usage"),
    ]
}

pub(crate) fn derma_rules() -> Vec<SlotRule> {
    vec![
        rule(r"(soap|lotion|food|plant|woods|detergent)", "triggers"),
        rule(r"(itch|burn|sting|pain|hot|fire)", "sensation"),
        rule(r"(spread|move|growing|bigger|body|all over)", "spread"),
        rule(r"(deep|bone|fat|white|charred|blister|open)", "depth"),
        flagged(
            r"(blood|bleed|gush|soak|pulsing|stop)",
            "bleeding",
            Some(r"(gush|won't stop|pulsing|heavy)"),
            Urgency::Critical,
            "severe bleeding",
        ),
        flagged(
            r"(pus|yellow|ooze|streak|line|hot|smell)",
            "infection_signs",
            Some(r"(streak|line)"),
            Urgency::High,
            "possible infection spread (lymphangitis)",
        ),
        flagged(
            r"(breath|throat|swallow|dizzy|faint|tongue|swell)",
            "systemic",
            None,
            Urgency::Critical,
            "possible anaphylaxis",
        ),
        rule(r"(face|arm|leg|back|hand|foot|stomach)", "location"),
    ]
}

pub(crate) fn systemic_rules() -> Vec<SlotRule> {
    vec![
        rule(r"(sun|heat|work|outside|sweat|hot|dry|faint|dizzy)", "intake"),
        flagged(
            r"(urine|pee|bathroom|burn|yellow|dark)",
            "urine_output",
            Some(r"(stopped sweating|no sweat|dry skin|confused)"),
            Urgency::Critical,
            "possible heatstroke",
        ),
        rule(r"(fever|temperature|sick|ill|unwell|symptom)", "assessment"),
        rule(r"(shiver|chill|shake|cold|night)", "fever_pattern"),
        rule(r"(eye|bone|joint|break|muscle)", "pain_specifics"),
        flagged(
            r"(bleed|gum|nose|spot|rash|red)",
            "bleeding_check",
            Some(r"bleed"),
            Urgency::High,
            "possible hemorrhagic fever",
        ),
        rule(r"(nose|throat|sneeze|cough|chest|congestion)", "respiratory_check"),
        rule(r"(weight|thin|fat|loss|gain|sleep|tired)", "weight_energy"),
        rule(r"(thirsty|hungry|eat|drink|hair|skin)", "classic_signs"),
        rule(r"(family|mom|dad|genetic|sugar|thyroid)", "timeline"),
    ]
}

/// Redirects out of GENERAL_SYSTEMIC, checked in this order; the first
/// hit wins and the rest are discarded.
pub(crate) fn redirect_probes() -> Vec<RedirectProbe> {
    let probe = |pattern: &str, target| RedirectProbe {
        pattern: Regex::new(pattern).expect("redirect pattern is valid"),
        target,
    };
    vec![
        probe(r"(stomach|vomit|puke|diarrhea|nausea|poop)", Category::Gastrointestinal),
        probe(r"(wheeze|short of breath|asthma|lung)", Category::Respiratory),
        probe(r"(seizure|blind|vision|double|slur)", Category::Neurological),
        probe(r"(rash|hives|itch|skin|bump)", Category::Dermatological),
    ]
}
