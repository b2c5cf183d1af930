use super::super::domain::{Archetype, CorrelationKey, DiagnosticState, Locale, Pillar};
use super::{
    ArchetypeContent, CorrelationContent, LocaleContent, PillarContent, QuestionContent,
    StateContent, UiCopy,
};

pub(super) static CONTENT: LocaleContent = LocaleContent {
    locale: Locale::En,
    states: [
        StateContent {
            state: DiagnosticState::Confusion,
            label: "Confusion",
            one_liner: "You are moving, but without a map.",
            meaning: "Your answers show competing priorities and no clear internal compass. \
                Energy goes into deciding what matters instead of acting on it.",
            characteristics: &[
                "Difficulty choosing between options of similar weight",
                "Starting many things and finishing few",
                "A sense that time passes without direction",
            ],
            primary_risk: "Spending years on other people's priorities because your own were never named.",
            recommended_focus: &[
                "Name the three things that matter most this season",
                "Close one open loop every day",
            ],
            next_step: "Write one page describing what a good year looks like for you.",
            immediate_win: "Close or delete five open tasks that no longer serve you.",
            no_to_say: "Say no to new commitments until your top three priorities are written down.",
            mindset_shift: "From \"what should I do?\" to \"what do I refuse to neglect?\"",
            stoic_lesson: "Direction comes from knowing what is within your control and committing to it.",
            stoic_quote: "If a man knows not to which port he sails, no wind is favorable.",
            stoic_author: "Seneca",
        },
        StateContent {
            state: DiagnosticState::Overload,
            label: "Overload",
            one_liner: "You are carrying more than any one person should.",
            meaning: "Demand exceeds your capacity. The problem is not discipline but volume: \
                too many commitments and too little recovery.",
            characteristics: &[
                "Chronic tiredness at the end of the day",
                "Agreeing to requests you later resent",
                "Rest that feels like a debt instead of a right",
            ],
            primary_risk: "Burnout that forces the rest you are refusing to take voluntarily.",
            recommended_focus: &[
                "Cut commitments before adding new routines",
                "Protect one recovery block every day",
            ],
            next_step: "List every active commitment and mark the two you will renegotiate this week.",
            immediate_win: "Cancel or delegate one meeting or task scheduled for tomorrow.",
            no_to_say: "Say no to the next request that arrives while you are already at capacity.",
            mindset_shift: "From \"how do I fit it all in?\" to \"what deserves my limited energy?\"",
            stoic_lesson: "Doing less, and only what is essential, is the path to tranquility.",
            stoic_quote: "If you seek tranquility, do less.",
            stoic_author: "Marcus Aurelius",
        },
        StateContent {
            state: DiagnosticState::Reactivity,
            label: "Reactivity",
            one_liner: "Events are steering you before you can steer yourself.",
            meaning: "The space between stimulus and response is short. Frustration and urgency \
                drive decisions you later revisit.",
            characteristics: &[
                "Quick irritation when plans break",
                "Replies sent in the heat of the moment",
                "Regret after difficult conversations",
            ],
            primary_risk: "Damaging relationships and decisions through responses you would not choose when calm.",
            recommended_focus: &[
                "Build a pause before every important reply",
                "Notice the first physical sign of agitation",
            ],
            next_step: "Adopt a ten-minute rule before answering anything that upsets you.",
            immediate_win: "Take three slow breaths before the next reply you write today.",
            no_to_say: "Say no to answering provocations on the same day you receive them.",
            mindset_shift: "From \"they made me react\" to \"I choose my response\".",
            stoic_lesson: "Events do not disturb us; our judgments about them do.",
            stoic_quote: "Men are disturbed not by things, but by the views which they take of things.",
            stoic_author: "Epictetus",
        },
        StateContent {
            state: DiagnosticState::Uncertainty,
            label: "Uncertainty",
            one_liner: "The future is taking up the space where action should be.",
            meaning: "Worry about what might happen, often money or stability, outweighs the \
                steps you can take now.",
            characteristics: &[
                "Rehearsing bad scenarios in your head",
                "Postponing decisions until you feel sure",
                "Financial insecurity colouring daily choices",
            ],
            primary_risk: "Paralysis that turns imagined risks into real stagnation.",
            recommended_focus: &[
                "Separate what you control from what you do not",
                "Turn each worry into one concrete action",
            ],
            next_step: "Write down your three main worries and one action you control for each.",
            immediate_win: "Check one number you have been avoiding, such as a balance or a bill.",
            no_to_say: "Say no to decisions made only to quiet anxiety.",
            mindset_shift: "From \"what if it goes wrong?\" to \"what can I do today?\"",
            stoic_lesson: "Most suffering lives in anticipation; the present moment is usually bearable.",
            stoic_quote: "We suffer more often in imagination than in reality.",
            stoic_author: "Seneca",
        },
        StateContent {
            state: DiagnosticState::Disconnection,
            label: "Disconnection",
            one_liner: "You are present in body but distant from the people around you.",
            meaning: "Your answers point to weak bonds and few spaces where you can be fully \
                yourself.",
            characteristics: &[
                "Conversations that stay on the surface",
                "Feeling alone even in company",
                "Postponing contact with people who matter",
            ],
            primary_risk: "Isolation that quietly erodes health, meaning and resilience.",
            recommended_focus: &[
                "Invest in one relationship deliberately each week",
                "Be fully honest in at least one conversation a day",
            ],
            next_step: "Schedule a call or meeting with someone you miss within the next seven days.",
            immediate_win: "Send a genuine message of appreciation to one person today.",
            no_to_say: "Say no to screens during one shared meal this week.",
            mindset_shift: "From \"nobody reaches out to me\" to \"I will go first\".",
            stoic_lesson: "We are made to work together; isolation goes against our nature.",
            stoic_quote: "We were born for cooperation, like feet, like hands, like eyelids.",
            stoic_author: "Marcus Aurelius",
        },
        StateContent {
            state: DiagnosticState::Stagnation,
            label: "Stagnation",
            one_liner: "The routine continues, but you are no longer moving forward.",
            meaning: "Days repeat without growth. You know what needs to change but keep \
                postponing it.",
            characteristics: &[
                "A sense of living on autopilot",
                "Important changes always left for later",
                "Little enthusiasm for the future",
            ],
            primary_risk: "Waking up years from now in the same place, with less energy to change.",
            recommended_focus: &[
                "Choose one change and start it in its smallest form",
                "Track progress weekly instead of chasing perfection",
            ],
            next_step: "Pick the change you postpone most and define a first step that takes fifteen minutes.",
            immediate_win: "Do that fifteen-minute step today, before anything else.",
            no_to_say: "Say no to waiting for the perfect moment to begin.",
            mindset_shift: "From \"someday\" to \"today, in a small way\".",
            stoic_lesson: "Life is long enough if used well; postponing is its greatest waste.",
            stoic_quote: "While we are postponing, life speeds by.",
            stoic_author: "Seneca",
        },
        StateContent {
            state: DiagnosticState::Clarity,
            label: "Clarity",
            one_liner: "You see the path; now it needs consistency.",
            meaning: "Your direction is clear and decisions come from a calm place. The work now \
                is turning clarity into steady action across every pillar.",
            characteristics: &[
                "Decisions made without long hesitation",
                "A defined sense of purpose",
                "Calm under ordinary pressure",
            ],
            primary_risk: "Confusing knowing what to do with doing it, and letting weaker pillars drift.",
            recommended_focus: &[
                "Convert clarity into weekly commitments",
                "Raise your weakest pillar to the level of the others",
            ],
            next_step: "Define one measurable commitment for your weakest pillar this month.",
            immediate_win: "Block thirty minutes in tomorrow's calendar for that pillar.",
            no_to_say: "Say no to opportunities that do not fit your direction, however attractive.",
            mindset_shift: "From \"I know where I am going\" to \"I walk there every day\".",
            stoic_lesson: "Clarity is a starting point; character is built by repeated action.",
            stoic_quote: "First say to yourself what you would be; and then do what you have to do.",
            stoic_author: "Epictetus",
        },
        StateContent {
            state: DiagnosticState::Alignment,
            label: "Alignment",
            one_liner: "What you value and what you do are moving together.",
            meaning: "Your actions match your values. This is a strong position, and the task is \
                to protect it and share it.",
            characteristics: &[
                "Little gap between intention and behaviour",
                "Energy that comes from meaningful activity",
                "A stable sense of identity",
            ],
            primary_risk: "Complacency: assuming alignment is permanent and neglecting the habits that built it.",
            recommended_focus: &[
                "Protect the routines that sustain you",
                "Support someone who is walking a similar path",
            ],
            next_step: "Write down the three habits most responsible for your current balance.",
            immediate_win: "Note one choice this week that kept you aligned, and why it mattered.",
            no_to_say: "Say no to commitments that would trade your values for approval.",
            mindset_shift: "From \"I have arrived\" to \"I keep choosing this\".",
            stoic_lesson: "Virtue is a practice, not a trophy; it is kept by exercising it.",
            stoic_quote: "Waste no more time arguing about what a good man should be. Be one.",
            stoic_author: "Marcus Aurelius",
        },
    ],
    pillars: [
        PillarContent {
            pillar: Pillar::Health,
            label: "Health",
            tier_insights: [
                "Your body is signalling depletion; sleep, movement and food need attention before anything else.",
                "Your health holds, but with little reserve; small lapses will show quickly.",
                "Your health base is solid; consistency will keep it that way.",
                "Your body is a genuine resource; use that energy deliberately.",
            ],
            leverage: "Fix sleep first: a consistent bedtime lifts every other pillar.",
        },
        PillarContent {
            pillar: Pillar::Work,
            label: "Work",
            tier_insights: [
                "Work is draining more than it gives and is crowding out the rest of your life.",
                "Work is sustainable only on good weeks; meaning or boundaries are thin.",
                "Work is meaningful and mostly under control.",
                "Work energises you and reflects who you are.",
            ],
            leverage: "Set a hard stop to your workday and hold it five days in a row.",
        },
        PillarContent {
            pillar: Pillar::Relationships,
            label: "Relationships",
            tier_insights: [
                "Your bonds are thin; you lack places where you can be yourself.",
                "You have connection, but it is inconsistent or stays on the surface.",
                "You have reliable relationships that support you.",
                "Your relationships are deep and a source of strength.",
            ],
            leverage: "Schedule one unhurried conversation each week with someone who matters.",
        },
        PillarContent {
            pillar: Pillar::Finance,
            label: "Finance",
            tier_insights: [
                "Money is a constant source of worry and drives many decisions.",
                "Your finances work, but one surprise could unbalance them.",
                "You feel in control of your money most of the time.",
                "Your finances give you freedom and options.",
            ],
            leverage: "Review every recurring expense and cancel the one you would not choose again.",
        },
        PillarContent {
            pillar: Pillar::Spirituality,
            label: "Spirituality",
            tier_insights: [
                "There is almost no space for reflection, meaning or contemplation.",
                "Moments of reflection exist but are rare and easily displaced.",
                "You have a regular practice that grounds you.",
                "Reflection and meaning are woven into your days.",
            ],
            leverage: "Start a five-minute evening review: what went well, what you will do better.",
        },
        PillarContent {
            pillar: Pillar::Leisure,
            label: "Leisure",
            tier_insights: [
                "Rest is absent or comes with guilt; you are running without recovery.",
                "You rest sometimes, but rarely fully.",
                "You have healthy time for rest and play.",
                "Play and rest are a natural part of your life.",
            ],
            leverage: "Book two hours of guilt-free leisure this week as if it were a meeting.",
        },
        PillarContent {
            pillar: Pillar::Identity,
            label: "Identity",
            tier_insights: [
                "You are defined by roles and demands; your own sense of self is faint.",
                "You know who you are, but that knowledge bends under pressure.",
                "Your identity is clear beyond your roles.",
                "You have a strong, stable sense of who you are.",
            ],
            leverage: "Write five sentences that describe you without mentioning work or family roles.",
        },
    ],
    archetypes: [
        ArchetypeContent {
            archetype: Archetype::Sovereign,
            label: "The Sovereign",
            description: "Clear-minded and balanced across pillars; your task is stewardship of what you have built.",
        },
        ArchetypeContent {
            archetype: Archetype::Architect,
            label: "The Architect",
            description: "You see clearly but your foundation is uneven; build the weakest pillar with the intent you bring to the rest.",
        },
        ArchetypeContent {
            archetype: Archetype::Warrior,
            label: "The Warrior",
            description: "Strong but stretched; you have resources, yet pressure consumes them faster than you recover.",
        },
        ArchetypeContent {
            archetype: Archetype::Survivor,
            label: "The Survivor",
            description: "Under pressure with little in reserve; recovery comes before any new ambition.",
        },
        ArchetypeContent {
            archetype: Archetype::Seeker,
            label: "The Seeker",
            description: "Searching for direction; answers will come from small experiments, not from more thinking.",
        },
        ArchetypeContent {
            archetype: Archetype::Wanderer,
            label: "The Wanderer",
            description: "Drifting away from people or progress; reconnection starts with one deliberate step.",
        },
    ],
    correlations: [
        CorrelationContent {
            correlation: CorrelationKey::WorkHealth,
            text: "Work is consuming the energy your health needs; recovering in one helps the other.",
        },
        CorrelationContent {
            correlation: CorrelationKey::WorkLeisure,
            text: "Without rest, work expands to fill all your time; protecting leisure will also improve your work.",
        },
        CorrelationContent {
            correlation: CorrelationKey::FinanceWork,
            text: "Financial pressure is keeping you in work patterns that drain you.",
        },
        CorrelationContent {
            correlation: CorrelationKey::RelationshipsLeisure,
            text: "Little free time leaves little room for people; shared leisure can repair both.",
        },
        CorrelationContent {
            correlation: CorrelationKey::IdentitySpirituality,
            text: "Without space for reflection your sense of self fades; contemplation rebuilds identity.",
        },
        CorrelationContent {
            correlation: CorrelationKey::RelationshipsIdentity,
            text: "When you are unsure of who you are, closeness feels risky; honesty strengthens both.",
        },
        CorrelationContent {
            correlation: CorrelationKey::HealthFinance,
            text: "Money worries and physical depletion feed each other; small gains in either help both.",
        },
        CorrelationContent {
            correlation: CorrelationKey::BalancedBase,
            text: "No pillar is dragging the others down; your base is balanced enough to build on.",
        },
    ],
    questions: [
        QuestionContent { id: 1, prompt: "I feel unsure about what I really want from my life." },
        QuestionContent { id: 2, prompt: "I have a clear sense of purpose guiding my days." },
        QuestionContent { id: 3, prompt: "I struggle to decide between competing priorities." },
        QuestionContent { id: 4, prompt: "I have more commitments than I can handle." },
        QuestionContent { id: 5, prompt: "I end the day mentally and physically exhausted." },
        QuestionContent { id: 6, prompt: "I say yes to requests even when I want to say no." },
        QuestionContent { id: 7, prompt: "I react impulsively when things do not go my way." },
        QuestionContent { id: 8, prompt: "I can pause before responding to something stressful." },
        QuestionContent { id: 9, prompt: "I worry about the future more than I act on it." },
        QuestionContent { id: 10, prompt: "I feel distant from the people closest to me." },
        QuestionContent { id: 11, prompt: "I feel my routine has stopped moving me forward." },
        QuestionContent { id: 12, prompt: "I postpone important changes I know I need to make." },
        QuestionContent { id: 13, prompt: "I take care of my body with sleep, movement and food." },
        QuestionContent { id: 14, prompt: "My work feels meaningful and sustainable." },
        QuestionContent { id: 15, prompt: "I feel in control of my finances." },
        QuestionContent { id: 16, prompt: "I have time for rest and play without feeling guilty." },
        QuestionContent { id: 17, prompt: "I practise reflection, faith or contemplation regularly." },
        QuestionContent { id: 18, prompt: "I know who I am apart from my roles and titles." },
        QuestionContent { id: 19, prompt: "My daily actions match my values." },
        QuestionContent { id: 20, prompt: "I make decisions from a calm and focused place." },
        QuestionContent { id: 21, prompt: "I have relationships where I can be fully myself." },
    ],
    ui: UiCopy {
        likert_scale: ["Never", "Rarely", "Sometimes", "Often", "Always"],
        locked_teaser: "Unlock the full report to see your action plan, stoic lesson and pillar insights.",
        enrichment_not_requested: "Your personalised plan has not been generated yet.",
        enrichment_pending: "Your personalised plan is still being prepared. Check back in a moment.",
        enrichment_unavailable: "Your personalised plan is temporarily unavailable. The rest of your report is complete.",
    },
};
