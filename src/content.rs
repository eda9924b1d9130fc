//! Static copy for the About page. The rendering layer consumes these
//! records as-is; editing the site means editing these tables.

pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2014",
        title: "Two laptops and a kitchen table",
        body: "Clearline started as a two-person freelancing duo building \
               WordPress sites for local restaurants. The first invoice paid \
               for the domain name and not much else.",
    },
    TimelineEntry {
        year: "2017",
        title: "First product team",
        body: "A fintech client asked us to stay on after launch. That retainer \
               became our first embedded product team, and embedded teams \
               became the way we prefer to work.",
    },
    TimelineEntry {
        year: "2020",
        title: "Remote by default",
        body: "We gave up the office before it was fashionable to. The studio \
               now spans four time zones, which mostly means someone is always \
               awake when a deploy goes sideways.",
    },
    TimelineEntry {
        year: "2023",
        title: "Performance becomes the pitch",
        body: "After shipping a storefront that loaded in under a second on a \
               mid-range phone, speed stopped being a feature we offered and \
               became the thing clients came for.",
    },
    TimelineEntry {
        year: "2026",
        title: "Still shipping",
        body: "Twenty-two people, one shared linter config, and a standing \
               Friday demo that nobody is allowed to skip.",
    },
];

pub struct ValueCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const VALUES: &[ValueCard] = &[
    ValueCard {
        icon: "🎯",
        title: "Our mission",
        body: "Build web products that feel instant, read clearly, and keep \
               working long after the launch party.",
    },
    ValueCard {
        icon: "🔭",
        title: "Our vision",
        body: "A web where small teams ship software that outperforms what \
               ten times the headcount used to produce.",
    },
    ValueCard {
        icon: "🧭",
        title: "How we work",
        body: "Small senior teams, weekly demos, no hand-offs. The people who \
               design a thing are the people who ship it.",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub initials: &'static str,
    /// CSS gradient for the initial-avatar disc.
    pub accent: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Maija Koskinen",
        role: "Founder & Principal Engineer",
        bio: "Wrote the studio's first line of code and still reviews most of \
              the rest. Allergic to loading spinners.",
        initials: "MK",
        accent: "linear-gradient(135deg, #7EB2FF, #4169E1)",
    },
    TeamMember {
        name: "Dan Okafor",
        role: "Design Lead",
        bio: "Turns vague adjectives into design systems. Owns more mechanical \
              keyboards than the rest of the team combined.",
        initials: "DO",
        accent: "linear-gradient(135deg, #9D7BFF, #6A3DE8)",
    },
    TeamMember {
        name: "Sofia Reyes",
        role: "Engineering Manager",
        bio: "Keeps four client teams moving without a single status meeting. \
              Nobody knows how. She won't say.",
        initials: "SR",
        accent: "linear-gradient(135deg, #5FD4C4, #1E9E8A)",
    },
    TeamMember {
        name: "Petr Havel",
        role: "Performance Engineer",
        bio: "Measures everything twice before shaving the first millisecond. \
              Treats a regressed Lighthouse score as a personal insult.",
        initials: "PH",
        accent: "linear-gradient(135deg, #FFB46B, #E8743D)",
    },
];

pub struct StatFigure {
    pub icon: &'static str,
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

/// Successive stat cards start this much later than the previous one, so
/// the band counts up as a little cascade instead of all at once.
pub const STAT_STAGGER_MS: u32 = 150;

pub const STATS: &[StatFigure] = &[
    StatFigure {
        icon: "🚀",
        target: 320,
        suffix: "+",
        label: "Projects shipped",
    },
    StatFigure {
        icon: "🤝",
        target: 180,
        suffix: "+",
        label: "Clients kept",
    },
    StatFigure {
        icon: "⌛",
        target: 12,
        suffix: "",
        label: "Years in business",
    },
    StatFigure {
        icon: "☕",
        target: 12_400,
        suffix: "+",
        label: "Cups of coffee",
    },
];
