//! Timeline events

use vitreo_types::{Category, Significance, TimelineCategory, TimelineEvent};

/// Events in authored order. Same-year events keep this order in every view.
pub static TIMELINE_EVENTS: &[TimelineEvent] = &[
    TimelineEvent {
        year: 1970,
        title: "First Pars Plana Vitrectomy",
        description: "Robert Machemer performs the first pars plana vitrectomy using the VISC (Vitreous Infusion Suction Cutter), a single 17-gauge instrument combining infusion, cutting, and aspiration. This landmark achievement creates the entire field of vitreoretinal surgery.",
        category: TimelineCategory::Milestone,
        significance: Significance::Landmark,
    },
    TimelineEvent {
        year: 1972,
        title: "Multi-Port Vitrectomy System",
        description: "Conor O'Malley and Ralph Heintz develop the three-port pars plana vitrectomy system using 20-gauge instruments, separating infusion, illumination, and cutting into dedicated ports. This design becomes the standard for decades.",
        category: TimelineCategory::Field(Category::Instruments),
        significance: Significance::Landmark,
    },
    TimelineEvent {
        year: 1980,
        title: "Introduction of Perfluorocarbon Liquids",
        description: "Perfluorocarbon liquids (PFCLs) are introduced as intraoperative tools for retinal surgery. Their high specific gravity allows them to unfold and flatten detached retina from posterior to anterior, revolutionizing complex detachment repair.",
        category: TimelineCategory::Field(Category::Pharmaceuticals),
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 1987,
        title: "Silicone Oil Tamponade Standardized",
        description: "The Silicone Oil Study establishes evidence-based guidelines for silicone oil use in complex retinal detachments with PVR, standardizing tamponade selection for severe cases.",
        category: TimelineCategory::Field(Category::Pharmaceuticals),
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 1996,
        title: "25-Gauge Vitrectomy Development",
        description: "Claus Eckardt develops the first 25-gauge sutureless vitrectomy system, beginning the trend toward minimally invasive vitreoretinal surgery with self-sealing sclerotomies.",
        category: TimelineCategory::Field(Category::Instruments),
        significance: Significance::Landmark,
    },
    TimelineEvent {
        year: 2002,
        title: "Wide-Angle Viewing Systems",
        description: "Non-contact wide-angle viewing systems achieve mainstream adoption, providing panoramic retinal visualization without an assistant holding a contact lens.",
        category: TimelineCategory::Field(Category::Visualization),
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 2004,
        title: "Anti-VEGF Era Begins",
        description: "Off-label intravitreal bevacizumab (Avastin) demonstrates dramatic efficacy for wet AMD, launching the anti-VEGF revolution. Ranibizumab (Lucentis) receives FDA approval in 2006, aflibercept (Eylea) in 2011.",
        category: TimelineCategory::Field(Category::Pharmaceuticals),
        significance: Significance::Landmark,
    },
    TimelineEvent {
        year: 2005,
        title: "23-Gauge Vitrectomy Introduced",
        description: "Claus Eckardt introduces 23-gauge vitrectomy, offering a middle ground between the rigidity of 20-gauge and the flexibility limitations of early 25-gauge instruments.",
        category: TimelineCategory::Field(Category::Instruments),
        significance: Significance::Notable,
    },
    TimelineEvent {
        year: 2008,
        title: "Chandelier Endoillumination",
        description: "Chandelier illumination systems gain widespread adoption, enabling bimanual surgical techniques by providing fixed, hands-free panoramic illumination during vitrectomy.",
        category: TimelineCategory::Field(Category::Instruments),
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 2010,
        title: "ILM Peeling Becomes Standard",
        description: "Internal limiting membrane peeling is established as standard of care for macular hole surgery, with closure rates exceeding 95% compared to 70% without ILM peel.",
        category: TimelineCategory::Milestone,
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 2014,
        title: "Intraoperative OCT Integration",
        description: "Microscope-integrated intraoperative OCT systems (Zeiss RESCAN 700) enter clinical use, providing real-time retinal cross-sections during surgery. The DISCOVER study demonstrates altered decision-making in 43% of cases.",
        category: TimelineCategory::Field(Category::Imaging),
        significance: Significance::Landmark,
    },
    TimelineEvent {
        year: 2015,
        title: "27-Gauge Vitrectomy Systems",
        description: "27-gauge vitrectomy platforms achieve clinical maturity with improved cutter technology and instrument stiffness, establishing new standard for minimally invasive surgery.",
        category: TimelineCategory::Field(Category::Instruments),
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 2017,
        title: "First Gene Therapy for Inherited Blindness",
        description: "Luxturna (voretigene neparvovec) receives FDA approval — the first gene therapy for any genetic disease — treating RPE65-mediated inherited retinal dystrophy via subretinal injection.",
        category: TimelineCategory::Field(Category::Pharmaceuticals),
        significance: Significance::Landmark,
    },
    TimelineEvent {
        year: 2017,
        title: "3D Heads-Up Display Surgery",
        description: "3D visualization platforms (Alcon NGENUITY, TrueVision) gain FDA clearance and rapid adoption, offering digital enhancement of surgical viewing with improved ergonomics.",
        category: TimelineCategory::Field(Category::Visualization),
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 2018,
        title: "First FDA-Approved Autonomous AI Diagnostic",
        description: "IDx-DR becomes the first FDA-approved AI system for autonomous medical diagnosis, screening for diabetic retinopathy from fundus photographs without specialist oversight.",
        category: TimelineCategory::Field(Category::Ai),
        significance: Significance::Landmark,
    },
    TimelineEvent {
        year: 2019,
        title: "PRECEYES Robotic Surgery CE Mark",
        description: "The PRECEYES Surgical System receives CE marking in Europe, becoming the first certified robot for intraocular surgery with 10-micrometer positioning precision.",
        category: TimelineCategory::Field(Category::Robotics),
        significance: Significance::Landmark,
    },
    TimelineEvent {
        year: 2021,
        title: "First Robotic Subretinal Injection",
        description: "PRECEYES performs the first-in-human robotic subretinal drug injection under local anesthesia, demonstrating feasibility of robot-assisted gene therapy delivery.",
        category: TimelineCategory::Field(Category::Robotics),
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 2022,
        title: "Faricimab Bispecific Antibody Approved",
        description: "Faricimab (Vabysmo) receives FDA approval as the first bispecific antibody for retinal disease, targeting both VEGF-A and Ang-2 with extended dosing intervals up to 16 weeks.",
        category: TimelineCategory::Field(Category::Pharmaceuticals),
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 2022,
        title: "EVA Nexus Platform Launch",
        description: "DORC launches the EVA Nexus, the only FDA-cleared vitrectomy platform with integrated subretinal injection capability, positioning it as essential infrastructure for gene therapy delivery.",
        category: TimelineCategory::Field(Category::Instruments),
        significance: Significance::Major,
    },
    TimelineEvent {
        year: 2023,
        title: "OQrimo Surgical Robot Approved in Japan",
        description: "OQrimo, an intraocular endoscope-holding robot, receives approval in Japan, enabling two-handed surgical manipulation during vitreoretinal surgery for proliferative diabetic retinopathy.",
        category: TimelineCategory::Field(Category::Robotics),
        significance: Significance::Notable,
    },
    TimelineEvent {
        year: 2024,
        title: "AI Surgical Planning Integration",
        description: "Clinical trials begin for AI-assisted surgical planning systems that combine preoperative OCT and fundus data to optimize robotic surgery parameters and predict surgical outcomes.",
        category: TimelineCategory::Field(Category::Ai),
        significance: Significance::Notable,
    },
];
