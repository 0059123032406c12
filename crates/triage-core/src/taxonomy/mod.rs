//! Symptom taxonomy: keyword-router tables and question banks.
//!
//! Pure configuration. Each category owns a router table (sub-group →
//! trigger words, scanned in definition order) and each (category,
//! sub-group) pair owns an ordered slot → candidate-question mapping.
//! Slot order here is the order missing facts are asked about.

use crate::models::{Category, SubGroup};

/// Router table: sub-groups with their trigger words, in priority order.
pub type RouterTable = &'static [(SubGroup, &'static [&'static str])];

/// Question bank: slots with their candidate question texts, in the
/// order they should be asked.
pub type QuestionBank = &'static [(&'static str, &'static [&'static str])];

/// Keyword-router table for a category.
pub fn router_table(category: Category) -> RouterTable {
    match category {
        Category::Gastrointestinal => GASTRO_ROUTER,
        Category::Neurological => NEURO_ROUTER,
        Category::Respiratory => RESPIRATORY_ROUTER,
        Category::Orthopedic => ORTHO_ROUTER,
        Category::Dermatological => DERMA_ROUTER,
        Category::GeneralSystemic => GENERAL_ROUTER,
    }
}

/// Question bank for a (category, sub-group) pair.
///
/// A sub-group that does not belong to the category yields an empty
/// bank, which the controller treats as "nothing left to ask".
pub fn question_bank(category: Category, sub_group: SubGroup) -> QuestionBank {
    match category {
        Category::Gastrointestinal => match sub_group {
            SubGroup::Stomach => GI_STOMACH,
            SubGroup::Intestines => GI_INTESTINES,
            SubGroup::Esophagus => GI_ESOPHAGUS,
            SubGroup::GiGeneral => GI_GENERAL,
            SubGroup::Default => GI_DEFAULT,
            _ => &[],
        },
        Category::Neurological => match sub_group {
            SubGroup::Headache => NEURO_HEADACHE,
            SubGroup::Dizziness => NEURO_DIZZINESS,
            SubGroup::Vision => NEURO_VISION,
            SubGroup::Consciousness => NEURO_CONSCIOUSNESS,
            SubGroup::NeuroGeneral => NEURO_GENERAL,
            SubGroup::Default => NEURO_DEFAULT,
            _ => &[],
        },
        Category::Respiratory => match sub_group {
            SubGroup::Breathing => RESP_BREATHING,
            SubGroup::Cough => RESP_COUGH,
            SubGroup::Infection => RESP_INFECTION,
            SubGroup::RespGeneral => RESP_GENERAL,
            SubGroup::Default => RESP_DEFAULT,
            _ => &[],
        },
        Category::Orthopedic => match sub_group {
            SubGroup::SpineBack => ORTHO_SPINE_BACK,
            SubGroup::Joints => ORTHO_JOINTS,
            SubGroup::OrthoTrauma => ORTHO_TRAUMA,
            SubGroup::Extremities => ORTHO_EXTREMITIES,
            SubGroup::OrthoGeneral => ORTHO_GENERAL,
            SubGroup::Default => ORTHO_DEFAULT,
            _ => &[],
        },
        Category::Dermatological => match sub_group {
            SubGroup::RashAllergy => DERMA_RASH_ALLERGY,
            SubGroup::TraumaBurn => DERMA_TRAUMA_BURN,
            SubGroup::Bites => DERMA_BITES,
            SubGroup::DermaGeneral => DERMA_GENERAL,
            SubGroup::Default => DERMA_DEFAULT,
            _ => &[],
        },
        Category::GeneralSystemic => match sub_group {
            SubGroup::SummerHydration => SYS_SUMMER_HYDRATION,
            SubGroup::MonsoonVector => SYS_MONSOON_VECTOR,
            SubGroup::WinterViral => SYS_WINTER_VIRAL,
            SubGroup::ChronicMetabolic => SYS_CHRONIC_METABOLIC,
            SubGroup::FluSymptoms => SYS_FLU_SYMPTOMS,
            SubGroup::Fatigue => SYS_FATIGUE,
            SubGroup::WeightAppetite => SYS_WEIGHT_APPETITE,
            SubGroup::Default => SYS_DEFAULT,
            _ => &[],
        },
    }
}

// =========================================================================
// Router tables
// =========================================================================

const GASTRO_ROUTER: RouterTable = &[
    (
        SubGroup::Stomach,
        &["vomit", "nausea", "puke", "throw up", "upper", "ulcer", "gastritis", "tummy"],
    ),
    (
        SubGroup::Intestines,
        &["diarrhea", "constipation", "poop", "stool", "bloat", "gas", "cramp", "lower"],
    ),
    (
        SubGroup::Esophagus,
        &["heartburn", "acid", "reflux", "chest", "burn", "swallow", "gerd"],
    ),
    (SubGroup::GiGeneral, &["poison", "food", "ate", "sushi", "bad food", "flu"]),
];

const NEURO_ROUTER: RouterTable = &[
    (
        SubGroup::Headache,
        &[
            "headache", "migraine", "head", "temple", "throb", "pounding", "forehead", "skull",
            "pressure", "ache",
        ],
    ),
    (
        SubGroup::Dizziness,
        &[
            "dizzy", "spin", "spinning", "lightheaded", "woozy", "balance", "steady", "unsteady",
            "vertigo", "fall",
        ],
    ),
    (
        SubGroup::Vision,
        &["vision", "blur", "blurry", "double", "see", "sight", "flash", "spots", "blind", "eye"],
    ),
    (
        SubGroup::Consciousness,
        &[
            "faint", "black out", "blackout", "passed out", "unconscious", "seizure", "fit",
            "convulsion", "wake up",
        ],
    ),
    (
        SubGroup::NeuroGeneral,
        &[
            "numb", "numbness", "tingle", "tingling", "weak", "weakness", "confused", "confusion",
            "slur", "speak", "stroke", "face",
        ],
    ),
];

const RESPIRATORY_ROUTER: RouterTable = &[
    (
        SubGroup::Breathing,
        &[
            "breath", "breathing", "short of breath", "gasp", "wheeze", "tight", "suffocate",
            "air", "pant", "asthma", "inhaler",
        ],
    ),
    (
        SubGroup::Cough,
        &[
            "cough", "hacking", "phlegm", "sputum", "mucus", "spit", "blood", "dry cough",
            "wet cough", "bark",
        ],
    ),
    (
        SubGroup::Infection,
        &[
            "pneumonia", "bronchitis", "fever", "chills", "flu", "cold", "chest infection",
            "painful breath",
        ],
    ),
    (
        SubGroup::RespGeneral,
        &[
            "chest", "congestion", "stuff", "stuffed", "allergy", "sneeze", "runny nose", "nose",
            "sinus",
        ],
    ),
];

const ORTHO_ROUTER: RouterTable = &[
    (
        SubGroup::SpineBack,
        &["back", "spine", "neck", "lumbar", "disc", "sciatica", "tailbone", "vertebrae", "stiff neck"],
    ),
    (
        SubGroup::Joints,
        &["knee", "hip", "shoulder", "elbow", "joint", "arthritis", "socket", "rotator cuff", "meniscus"],
    ),
    (
        SubGroup::Extremities,
        &["hand", "wrist", "finger", "thumb", "foot", "ankle", "toe", "heel", "plantar", "carpal"],
    ),
    (
        SubGroup::OrthoTrauma,
        &[
            "break", "broken", "fracture", "fall", "fell", "twist", "sprain", "accident", "hit",
            "crash", "pop", "snap",
        ],
    ),
    (
        SubGroup::OrthoGeneral,
        &["muscle", "ache", "sore", "stiffness", "swelling", "swell", "bruise", "cramp", "knot"],
    ),
];

const DERMA_ROUTER: RouterTable = &[
    (
        SubGroup::RashAllergy,
        &[
            "rash", "hives", "eczema", "redness", "bump", "blister", "spot", "pimple", "acne",
            "breakout", "psoriasis",
        ],
    ),
    (
        SubGroup::TraumaBurn,
        &[
            "cut", "burn", "bleed", "wound", "scrape", "scald", "fire", "knife", "injury", "tear",
            "laceration", "hot",
        ],
    ),
    (
        SubGroup::Bites,
        &["bite", "sting", "spider", "bug", "mosquito", "tick", "bee", "wasp", "insect"],
    ),
    (
        SubGroup::DermaGeneral,
        &["itch", "dry", "peel", "flake", "skin", "scab", "mole", "lump", "growth"],
    ),
];

const GENERAL_ROUTER: RouterTable = &[
    (
        SubGroup::SummerHydration,
        &[
            "sun", "heat", "hot", "sweat", "dry", "thirsty", "water", "urine", "pee", "burn",
            "faint", "dizzy", "dehydrated",
        ],
    ),
    (
        SubGroup::MonsoonVector,
        &[
            "mosquito", "bite", "shiver", "chill", "cold", "shake", "bone pain", "joint pain",
            "eye pain", "dengue", "malaria",
        ],
    ),
    (
        SubGroup::WinterViral,
        &[
            "flu", "cold", "sneeze", "runny", "nose", "ache", "body pain", "sore throat", "cough",
            "congestion", "viral",
        ],
    ),
    (
        SubGroup::ChronicMetabolic,
        &[
            "tired", "fatigue", "weak", "weight", "loss", "gain", "hair", "hungry", "thirst",
            "sugar", "thyroid", "pale", "sleep",
        ],
    ),
    (
        SubGroup::FluSymptoms,
        &[
            "fever", "chill", "shiver", "temperature", "high temp", "sweat", "hot", "cold",
            "body ache", "muscle ache", "sore body", "weak", "flu", "viral",
        ],
    ),
    (
        SubGroup::Fatigue,
        &[
            "tired", "fatigue", "exhausted", "low energy", "sleepy", "draining", "lethargic",
            "no energy", "worn out",
        ],
    ),
    (
        SubGroup::WeightAppetite,
        &[
            "weight loss", "weight gain", "lost weight", "thin", "heavy", "no appetite", "hungry",
            "not eating", "eating too much",
        ],
    ),
];

// =========================================================================
// Question banks: gastrointestinal
// =========================================================================

const GI_STOMACH: QuestionBank = &[
    (
        "duration",
        &[
            "How long have you had this stomach pain?",
            "When did the pain start?",
            "Has this been hurting for a while or did it just start?",
        ],
    ),
    (
        "vomiting",
        &[
            "Have you experienced any vomiting or nausea?",
            "Have you thrown up at all?",
            "Is there any nausea?",
        ],
    ),
    (
        "severity",
        &[
            "Does the pain get worse after eating?",
            "On a scale of 1-10, how severe is it?",
            "Is the pain sharp or dull?",
        ],
    ),
    (
        "triggers",
        &[
            "Did you eat anything unusual or from a restaurant recently?",
            "Could this be something you ate, like spicy or oily food?",
        ],
    ),
    (
        "hydration",
        &[
            "Are you able to keep water down?",
            "Are you drinking enough water, or feeling unusually thirsty?",
        ],
    ),
];

const GI_INTESTINES: QuestionBank = &[
    (
        "bowel",
        &[
            "Have you noticed any changes in your bowel movements (diarrhea or constipation)?",
            "Is everything normal when you go to the bathroom?",
        ],
    ),
    (
        "bloating",
        &["Is there any bloating or gas?", "Do you feel unusually full or bloated?"],
    ),
    (
        "cramps",
        &[
            "On a scale of 1-10, how severe are the cramps?",
            "Are the cramps coming and going?",
        ],
    ),
];

const GI_ESOPHAGUS: QuestionBank = &[
    (
        "swallowing",
        &["Do you have difficulty swallowing?", "Does it hurt when you swallow?"],
    ),
    (
        "heartburn",
        &[
            "Do you experience burning in the chest after meals?",
            "Does antacid relieve the burning sensation?",
        ],
    ),
    (
        "regurgitation",
        &[
            "Do you feel any acid or food coming up into your throat?",
            "Do you have a sour taste in your mouth?",
        ],
    ),
];

const GI_GENERAL: QuestionBank = &[
    (
        "food_history",
        &[
            "Did you eat anything unusual or uncooked recently?",
            "Any recent travel or food exposures?",
        ],
    ),
    (
        "fever",
        &["Do you have fever or chills?", "Have you noticed any sweating or night fevers?"],
    ),
];

const GI_DEFAULT: QuestionBank = &[(
    "assessment",
    &[
        "Where exactly is the pain located?",
        "How long have you felt this way?",
        "On a scale of 1-10, how severe is it?",
    ],
)];

// =========================================================================
// Question banks: neurological
// =========================================================================

const NEURO_HEADACHE: QuestionBank = &[
    (
        "location",
        &[
            "Where exactly is the pain? (Front, back, or just one side?)",
            "Is the pain all over your head or focused in one spot?",
        ],
    ),
    (
        "duration",
        &["How long have you had this headache?", "When did the pain start?"],
    ),
    (
        "associated_symptoms",
        &[
            "Do you feel nauseous or sick to your stomach?",
            "Are you sensitive to bright lights or loud noises right now?",
        ],
    ),
    (
        "severity",
        &[
            "On a scale of 1-10, how bad is the pain?",
            "Is it a throbbing pain, a tight band, or a sharp stabbing sensation?",
        ],
    ),
];

const NEURO_DIZZINESS: QuestionBank = &[
    (
        "sensation",
        &[
            "Does the room feel like it is spinning around you (vertigo), or do you just feel lightheaded?",
            "Do you feel like you might pass out, or are you just unsteady on your feet?",
        ],
    ),
    (
        "triggers",
        &[
            "Does standing up quickly make it worse?",
            "Does moving your head or rolling over in bed trigger the dizziness?",
        ],
    ),
    (
        "ears",
        &[
            "Do you hear any ringing or buzzing in your ears?",
            "Does your ear feel full or blocked?",
        ],
    ),
];

const NEURO_VISION: QuestionBank = &[
    (
        "clarity",
        &[
            "Is your vision blurry, or are you seeing double of everything?",
            "Have you lost vision in any part of your eye (like a curtain coming down)?",
        ],
    ),
    (
        "disturbances",
        &[
            "Are you seeing flashing lights, zig-zag lines, or spots?",
            "Do bright lights hurt your eyes?",
        ],
    ),
    (
        "onset",
        &[
            "Did this vision change happen suddenly or gradually?",
            "Is it affecting one eye or both eyes?",
        ],
    ),
];

const NEURO_CONSCIOUSNESS: QuestionBank = &[
    (
        "event",
        &[
            "Did you actually lose consciousness (black out) or just feel faint?",
            "Do you remember falling, or did you wake up on the floor?",
        ],
    ),
    (
        "warning",
        &[
            "Did you feel anything before it happened, like nausea or sweating?",
            "Were you doing anything specific (like exercising or standing up) when it happened?",
        ],
    ),
    (
        "aftermath",
        &[
            "Did you feel confused or extremely tired immediately after waking up?",
            "Did you bite your tongue or lose bladder control?",
        ],
    ),
];

const NEURO_GENERAL: QuestionBank = &[
    (
        "weakness",
        &[
            "Do you have any numbness or tingling in your face, arms, or legs?",
            "Is one side of your body weaker than the other?",
        ],
    ),
    (
        "cognition",
        &[
            "Are you having trouble speaking or understanding words?",
            "Do you feel confused or disoriented?",
        ],
    ),
    (
        "history",
        &[
            "Have you ever had a seizure or stroke before?",
            "Are you currently on any medication?",
        ],
    ),
];

const NEURO_DEFAULT: QuestionBank = &[(
    "assessment",
    &[
        "Can you describe the sensation you are feeling in more detail?",
        "When did you first notice this symptom?",
        "Is the symptom constant, or does it come and go?",
        "On a scale of 1-10, how much is this affecting your daily activities?",
    ],
)];

// =========================================================================
// Question banks: respiratory
// =========================================================================

const RESP_BREATHING: QuestionBank = &[
    (
        "onset",
        &[
            "Did this shortness of breath start suddenly or has it been getting worse over time?",
            "Does it happen when you are resting, or only when you exert yourself (like walking)?",
        ],
    ),
    (
        "severity",
        &[
            "On a scale of 1-10, how difficult is it to breathe right now?",
            "Do you feel like you can't get enough air into your lungs?",
        ],
    ),
    (
        "sounds",
        &[
            "Do you hear any wheezing or whistling sounds when you breathe?",
            "Is your chest feeling tight or heavy?",
        ],
    ),
];

const RESP_COUGH: QuestionBank = &[
    (
        "type",
        &[
            "Is your cough dry and tickly, or are you bringing up mucus (wet cough)?",
            "Does the cough happen more at night or during the day?",
        ],
    ),
    (
        "sputum",
        &[
            "If you are coughing up mucus, what color is it (clear, yellow, green, or rusty)?",
            "Have you coughed up any blood or pink froth?",
        ],
    ),
    (
        "duration",
        &["How long have you had this cough?", "Is it getting worse or staying the same?"],
    ),
];

const RESP_INFECTION: QuestionBank = &[
    (
        "systemic",
        &[
            "Do you have a high fever or chills along with the breathing issues?",
            "Do you feel generally weak or achy?",
        ],
    ),
    (
        "pain",
        &[
            "Does it hurt your chest when you take a deep breath (sharp stabbing pain)?",
            "Do your ribs hurt from coughing?",
        ],
    ),
    (
        "history",
        &[
            "Have you been around anyone sick recently?",
            "Have you had a cold or flu that moved into your chest?",
        ],
    ),
];

const RESP_GENERAL: QuestionBank = &[
    (
        "symptoms",
        &["Do you have a runny or blocked nose?", "Are your eyes itchy or watery?"],
    ),
    (
        "triggers",
        &[
            "Do you notice these symptoms more around pets, dust, or pollen?",
            "Does the weather change make it worse?",
        ],
    ),
    (
        "congestion",
        &[
            "Does your chest feel 'full' or congested?",
            "Are you having trouble clearing your throat?",
        ],
    ),
];

const RESP_DEFAULT: QuestionBank = &[(
    "assessment",
    &[
        "Can you describe exactly what you are feeling in your chest?",
        "How long has this been bothering you?",
        "Does anything make it better (like sitting up) or worse (like lying down)?",
        "Have you ever had lung problems before?",
    ],
)];

// =========================================================================
// Question banks: orthopedic
// =========================================================================

const ORTHO_SPINE_BACK: QuestionBank = &[
    (
        "radiation",
        &[
            "Does the pain shoot down your legs or arms?",
            "Do you feel any electric shock sensations traveling away from your back?",
        ],
    ),
    (
        "numbness",
        &[
            "Do you have any numbness, especially in your groin or buttocks area?",
            "Are you having any trouble controlling your bladder or bowels?",
        ],
    ),
    (
        "triggers",
        &[
            "Does it hurt more when you bend forward or lift things?",
            "Is the pain worse in the morning when you wake up?",
        ],
    ),
];

const ORTHO_JOINTS: QuestionBank = &[
    (
        "stiffness",
        &[
            "Is the joint stiff in the morning? If so, how long does it take to loosen up?",
            "Does the joint feel 'locked' or stuck?",
        ],
    ),
    (
        "swelling",
        &[
            "Is the area swollen, red, or hot to the touch?",
            "Can you see fluid buildup around the joint?",
        ],
    ),
    (
        "sounds",
        &[
            "Do you hear a clicking, grinding, or popping sound when you move it?",
            "Does it feel like 'bone on bone'?",
        ],
    ),
];

const ORTHO_TRAUMA: QuestionBank = &[
    (
        "mechanism",
        &[
            "How exactly did the injury happen (e.g., fell on outstretched hand, twisted knee)?",
            "Did you hear a loud 'pop' or 'snap' when it happened?",
        ],
    ),
    (
        "deformity",
        &[
            "Does the limb look bent, crooked, or misshapen?",
            "Is there any bone sticking out or a deep open wound?",
        ],
    ),
    (
        "function",
        &[
            "Can you put weight on it or move it at all?",
            "Are you able to walk, or is it too painful?",
        ],
    ),
];

const ORTHO_EXTREMITIES: QuestionBank = &[
    (
        "usage",
        &[
            "Does the pain get worse with specific activities like typing or walking?",
            "Is the pain worse when you take your first steps in the morning?",
        ],
    ),
    (
        "sensation",
        &[
            "Do you feel pins and needles or numbness in your fingers or toes?",
            "Does it feel like you are walking on a pebble?",
        ],
    ),
];

const ORTHO_GENERAL: QuestionBank = &[
    (
        "location",
        &["Where exactly is the pain located?", "Is it deep in the bone or more in the muscle?"],
    ),
    (
        "impact",
        &[
            "Is this stopping you from working or exercising?",
            "Does the pain wake you up at night?",
        ],
    ),
];

const ORTHO_DEFAULT: QuestionBank = &[(
    "assessment",
    &[
        "How long have you had this pain?",
        "On a scale of 1-10, how severe is it?",
        "Did you do any heavy lifting or exercise recently?",
    ],
)];

// =========================================================================
// Question banks: dermatological
// =========================================================================

const DERMA_RASH_ALLERGY: QuestionBank = &[
    (
        "spread",
        &[
            "Is the rash spreading to other parts of your body?",
            "Is it staying in one spot or moving?",
        ],
    ),
    (
        "triggers",
        &[
            "Did you use any new soaps, lotions, or detergents recently?",
            "Have you eaten anything new or been out in the woods?",
        ],
    ),
    (
        "sensation",
        &["Does the rash burn, itch, or feel hot to the touch?"],
    ),
];

const DERMA_TRAUMA_BURN: QuestionBank = &[
    (
        "depth",
        &[
            "How deep is the wound? Can you see fatty tissue or bone?",
            "For a burn, did the skin blister or turn white/black?",
        ],
    ),
    (
        "bleeding",
        &[
            "Is it bleeding heavily? Does it stop if you press on it?",
            "Is there any pulsing blood?",
        ],
    ),
    (
        "infection_signs",
        &[
            "Do you see any yellow pus or red streaks coming from the wound?",
            "Is the area swollen and painful?",
        ],
    ),
];

const DERMA_BITES: QuestionBank = &[
    (
        "appearance",
        &[
            "What does the bite look like? (e.g., Bullseye pattern, two puncture marks)",
            "Is the area around the bite turning black or purple?",
        ],
    ),
    (
        "systemic",
        &[
            "Are you having any trouble breathing or swallowing?",
            "Do you feel dizzy or nauseous?",
        ],
    ),
];

const DERMA_GENERAL: QuestionBank = &[
    (
        "duration",
        &[
            "How long have you had this skin issue?",
            "Has it changed in size or color recently?",
        ],
    ),
    (
        "location",
        &[
            "Where exactly on your body is the problem?",
            "Is it all over or just in one specific area?",
        ],
    ),
];

const DERMA_DEFAULT: QuestionBank = &[(
    "assessment",
    &[
        "Can you describe what the skin looks like right now?",
        "Is it causing you pain or just discomfort?",
        "Have you applied any creams or medications to it?",
    ],
)];

// =========================================================================
// Question banks: general / systemic
// =========================================================================

const SYS_SUMMER_HYDRATION: QuestionBank = &[
    (
        "intake",
        &[
            "How much water have you been drinking today?",
            "Have you been out in the sun or working in the heat recently?",
        ],
    ),
    (
        "urine_output",
        &[
            "Is your urine dark yellow or does it burn when you pee?",
            "When was the last time you urinated?",
        ],
    ),
    (
        "mental_state",
        &[
            "Do you feel confused or like you might pass out?",
            "Has the sweating stopped completely (dry skin)?",
        ],
    ),
];

const SYS_MONSOON_VECTOR: QuestionBank = &[
    (
        "fever_pattern",
        &[
            "Does the fever come and go (like every other day), or is it constant?",
            "Do you have severe shivering (rigors) before the fever spikes?",
        ],
    ),
    (
        "pain_specifics",
        &[
            "Do you have severe pain behind your eyes?",
            "Does it feel like your bones are breaking (severe body ache)?",
        ],
    ),
    (
        "bleeding_check",
        &[
            "Have you noticed any bleeding from your gums or nose?",
            "Do you see any tiny red spots (rashes) on your skin?",
        ],
    ),
];

const SYS_WINTER_VIRAL: QuestionBank = &[
    (
        "respiratory_check",
        &[
            "Do you have a runny nose or sore throat?",
            "Is there a cough accompanying the body aches?",
        ],
    ),
    (
        "severity",
        &[
            "Do you feel like you've been 'hit by a truck' (sudden extreme fatigue)?",
            "Is the fever mild or very high?",
        ],
    ),
];

const SYS_CHRONIC_METABOLIC: QuestionBank = &[
    (
        "weight_energy",
        &[
            "Have you noticed any unexplained weight loss or weight gain?",
            "Do you feel tired even after a full night's sleep?",
        ],
    ),
    (
        "classic_signs",
        &[
            "Are you feeling thirsty or hungry all the time?",
            "Are you experiencing hair loss or dry skin?",
        ],
    ),
    (
        "timeline",
        &[
            "How long have you been feeling this 'general' weakness?",
            "Has anyone in your family had thyroid or sugar issues?",
        ],
    ),
];

const SYS_FLU_SYMPTOMS: QuestionBank = &[
    (
        "temperature",
        &[
            "Have you measured your temperature? If so, how high is it?",
            "Do you feel hot or feverish to the touch?",
        ],
    ),
    (
        "duration",
        &[
            "How many days have you been feeling this way?",
            "Did these symptoms start suddenly or gradually?",
        ],
    ),
    (
        "other_symptoms",
        &[
            "Do you have a cough, sore throat, or runny nose?",
            "Are you experiencing any other specific pains besides body aches?",
        ],
    ),
];

const SYS_FATIGUE: QuestionBank = &[
    (
        "sleep",
        &[
            "How have you been sleeping lately? Is it restful?",
            "Are you sleeping more than usual?",
        ],
    ),
    (
        "impact",
        &[
            "Is the tiredness affecting your daily work or activities?",
            "Do you feel tired even after waking up?",
        ],
    ),
    (
        "duration",
        &[
            "How long have you been feeling this low energy?",
            "Has this been going on for weeks or just a few days?",
        ],
    ),
];

const SYS_WEIGHT_APPETITE: QuestionBank = &[
    (
        "amount",
        &[
            "Have you noticed a significant change in your weight recently?",
            "Are you eating more or less than usual?",
        ],
    ),
    (
        "timeline",
        &[
            "Over what period of time has this change happened?",
            "Did this change happen quickly?",
        ],
    ),
];

const SYS_DEFAULT: QuestionBank = &[(
    "assessment",
    &[
        "Can you tell me your main symptom right now?",
        "Do you have a fever? If so, how high is it?",
        "Are you eating and drinking normally?",
    ],
)];
