//! Built-in genre catalog of example seed prompts.
//!
//! Each genre bucket holds ten ready-made ideas so a user can start a generation
//! without typing. The catalog is static; the first entry is the default tab.

use serde::Serialize;

/// A genre bucket with its example prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenreEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Tab accent as RGB (the first stop of the genre's gradient)
    pub color: [u8; 3],
    pub prompts: &'static [&'static str],
}

const GENRES: &[GenreEntry] = &[
    GenreEntry {
        id: "pop",
        name: "Pop",
        icon: "✨",
        color: [236, 72, 153],
        prompts: &[
            "Modern K-pop, upbeat, catchy synth, female vocals, high energy",
            "80s Synthpop, retro vibe, analog synths, rhythmic, nostalgic",
            "Acoustic Pop, warm guitar, intimate male vocals, heartfelt",
            "Dreamy Indie Pop, ethereal textures, reverb-soaked vocals",
            "Bubblegum Pop, high energy, playful, bright, fast tempo",
            "Tropical House Pop, summer vibe, marimba, relaxed beat",
            "Dark Pop, moody, heavy bass, whispering vocals, cinematic",
            "Disco Pop, funky bassline, strings, danceable, 70s flair",
            "Piano Ballad, emotional, grand strings, powerful climax",
            "Future Bass Pop, melodic drops, vocal chops, modern production",
        ],
    },
    GenreEntry {
        id: "hiphop",
        name: "Hip-Hop",
        icon: "🎤",
        color: [245, 158, 11],
        prompts: &[
            "90s Boom Bap, lo-fi grit, soulful samples, male rap",
            "Modern Trap, heavy 808, fast hi-hats, dark atmosphere",
            "Jazz Hop, smooth piano, chill drums, saxophone, relaxed",
            "West Coast G-Funk, whiny lead synth, funky bass, 90s style",
            "Emo Rap, melodic, melancholic guitar, emotional delivery",
            "Drill, aggressive slide bass, UK style, hard hitting",
            "Conscious Hip-Hop, lyrical, orchestral elements, serious tone",
            "Cloud Rap, hazy, atmospheric, reverb, slow tempo",
            "Phonk, cowbell, distorted bass, Memphis style, dark",
            "Old School Funk Rap, party vibe, brass section, groovy",
        ],
    },
    GenreEntry {
        id: "rock",
        name: "Rock / Metal",
        icon: "🎸",
        color: [220, 38, 38],
        prompts: &[
            "Alternative Rock, 90s grunge, distorted guitar, raw energy",
            "Classic Rock, bluesy solo, hammond organ, stadium vibe",
            "Hardcore Punk, fast, aggressive, shouting vocals, short",
            "Symphonic Metal, operatic vocals, orchestral, epic, heavy",
            "Shoegaze, wall of sound, fuzzy guitars, buried vocals",
            "Pop Punk, high energy, melodic, teen angst, fast drums",
            "Progressive Rock, complex time signatures, synth, long solo",
            "Indie Rock, jangle guitar, lo-fi, upbeat, catchy",
            "Heavy Metal, dual guitar harmony, double kick pedal",
            "Post-Rock, instrumental, build-up, cinematic, emotional",
        ],
    },
    GenreEntry {
        id: "electronic",
        name: "Electronic",
        icon: "🎹",
        color: [59, 130, 246],
        prompts: &[
            "Cyberpunk Techno, dark, industrial, fast, cinematic",
            "Lo-fi House, dusty drums, filtered synths, deep bass",
            "Liquid Drum and Bass, fast breakbeat, smooth pads, melodic",
            "Synthwave, neon vibe, 80s drum machine, melodic lead",
            "Dubstep, heavy growl bass, rhythmic, aggressive drops",
            "Deep House, soulful, 4/4 beat, rhythmic chords, chic",
            "Trance, builds, epic melody, fast tempo, uplifting",
            "Ambient, no drums, wide soundscape, relaxing, meditative",
            "Eurodance, 90s style, high energy, female hook, male rap",
            "Hyperpop, glitched, high pitched, chaotic, fast",
        ],
    },
    GenreEntry {
        id: "korean",
        name: "K-Style",
        icon: "🇰🇷",
        color: [99, 102, 241],
        prompts: &[
            "90s Korean Ballad, emotional piano, orchestral, nostalgic",
            "City Pop, 80s vibes, funky bass, Korean lyrics style, chic",
            "Trot, upbeat, accordion, traditional rhythmic, adult contemporary",
            "K-Indie, soft acoustic, whimsical, sweet female vocals",
            "Korean Folk Rock, acoustic guitar, harmonica, lyrical",
            "K-R&B, smooth, groovy, soulful vocals, modern production",
            "Gugak Fusion, traditional instruments with electronic beats",
            "Korean Hip-hop, boom bap, poetic lyrics, chill vibe",
            "90s K-Dance, techno influence, high energy, synth lead",
            "Modern K-Drama OST style, romantic, strings, piano",
        ],
    },
];

/// All genres in tab order
pub fn all() -> &'static [GenreEntry] {
    GENRES
}

/// The initially selected genre
pub fn default_genre() -> &'static GenreEntry {
    &GENRES[0]
}

/// Look up a genre by id
pub fn by_id(id: &str) -> Option<&'static GenreEntry> {
    GENRES.iter().find(|g| g.id == id)
}

/// Ids of every genre, for completion and help text
pub fn ids() -> impl Iterator<Item = &'static str> {
    GENRES.iter().map(|g| g.id)
}
