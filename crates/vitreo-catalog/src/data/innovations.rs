//! Innovation records

use vitreo_types::{Category, Innovation, InnovationStatus};

/// Innovations in editorial order
pub static INNOVATIONS: &[Innovation] = &[
    Innovation {
        id: "27g-vitrectomy",
        title: "27-Gauge Vitrectomy Systems",
        category: Category::Instruments,
        year: 2015,
        status: InnovationStatus::Established,
        impact: 9,
        summary: "Ultra-small gauge instruments enabling minimally invasive vitreoretinal surgery with sutureless wound closure.",
        description: "The evolution from 20-gauge to 27-gauge vitrectomy represents one of the most significant advances in surgical technique. Modern 27-gauge systems feature dual-blade cutters operating at up to 16,000 cuts per minute, reducing vitreous traction and improving safety. The smaller gauge allows for sutureless, self-sealing sclerotomies, dramatically reducing operative time and postoperative inflammation.",
        key_benefits: &[
            "Sutureless wound closure",
            "Reduced postoperative inflammation",
            "Faster patient recovery",
            "Lower risk of endophthalmitis",
        ],
        manufacturers: Some(&[
            "Alcon",
            "Bausch + Lomb",
            "DORC",
        ]),
        image_alt: "27-gauge vitrectomy probe tip comparison",
    },
    Innovation {
        id: "ioct",
        title: "Intraoperative OCT (iOCT)",
        category: Category::Imaging,
        year: 2014,
        status: InnovationStatus::Established,
        impact: 9,
        summary: "Real-time optical coherence tomography integrated into surgical microscopes for live retinal imaging during surgery.",
        description: "Intraoperative OCT provides real-time, cross-sectional imaging of retinal structures during surgery. Microscope-integrated systems like the Zeiss RESCAN 700 and Leica EnFocus overlay OCT images directly in the surgeon's view. The DISCOVER and PIONEER studies demonstrated that iOCT altered surgical decision-making in 27-43% of membrane peeling cases, revealing residual membranes invisible to standard visualization.",
        key_benefits: &[
            "Real-time tissue visualization at retinal-layer resolution",
            "Altered surgical decisions in 27-43% of cases",
            "Reduced need for reoperation",
            "Enhanced surgical training capabilities",
        ],
        manufacturers: Some(&[
            "Zeiss",
            "Leica",
        ]),
        image_alt: "Intraoperative OCT scan during membrane peeling",
    },
    Innovation {
        id: "3d-hud",
        title: "3D Heads-Up Display Surgery",
        category: Category::Visualization,
        year: 2017,
        status: InnovationStatus::Established,
        impact: 8,
        summary: "Digital 3D visualization systems replacing traditional optical microscopes with high-definition displays.",
        description: "3D heads-up display systems such as the Alcon NGENUITY and TrueVision project a stereoscopic, digitally enhanced surgical view onto large screens. Surgeons wear passive 3D glasses and operate looking at the screen rather than through microscope oculars. Benefits include improved ergonomics (reducing neck strain), enhanced depth perception, digital image processing (filtering, contrast enhancement), and the ability to integrate iOCT and other data overlays.",
        key_benefits: &[
            "Superior surgeon ergonomics",
            "Enhanced depth perception",
            "Digital image processing and filtering",
            "Reduced light toxicity to retina",
        ],
        manufacturers: Some(&[
            "Alcon (NGENUITY)",
            "TrueVision",
        ]),
        image_alt: "3D heads-up display surgical system in operating room",
    },
    Innovation {
        id: "preceyes",
        title: "PRECEYES Robotic Surgical System",
        category: Category::Robotics,
        year: 2019,
        status: InnovationStatus::Emerging,
        impact: 10,
        summary: "CE-marked robotic platform for vitreoretinal microsurgery, enabling precision beyond human capability.",
        description: "The PRECEYES Surgical System is the world's first CE-marked robot for intraocular surgery. It provides motion scaling and tremor filtration, achieving positioning accuracy of 10 micrometers — far beyond the 100-micrometer limit of human hands. In 2021, it performed the first-in-human subretinal drug injection under local anesthesia. Randomized trials show improved precision and reduced tissue damage, particularly beneficial for subretinal gene therapy delivery and membrane peeling.",
        key_benefits: &[
            "10-micrometer positioning accuracy",
            "Tremor filtration and motion scaling",
            "Enables subretinal gene therapy delivery",
            "Reduced tissue damage vs manual surgery",
        ],
        manufacturers: Some(&[
            "Preceyes BV",
        ]),
        image_alt: "PRECEYES robotic arm performing vitreoretinal surgery",
    },
    Innovation {
        id: "anti-vegf",
        title: "Anti-VEGF Intravitreal Therapy",
        category: Category::Pharmaceuticals,
        year: 2004,
        status: InnovationStatus::Established,
        impact: 10,
        summary: "Revolutionary pharmacotherapy that transformed treatment of wet AMD, diabetic macular edema, and retinal vein occlusion.",
        description: "Anti-VEGF agents (bevacizumab, ranibizumab, aflibercept, brolucizumab, faricimab) are the most transformative development in retinal medicine. By blocking vascular endothelial growth factor, these drugs halt pathological neovascularization and reduce macular edema. The treatment shifted numerous conditions from inevitable blindness to manageable chronic diseases. Faricimab, the newest agent, offers bispecific activity against both VEGF-A and Ang-2 with extended dosing intervals up to 16 weeks.",
        key_benefits: &[
            "Preserved or improved vision in 90%+ of patients",
            "Shifted wet AMD from untreatable to manageable",
            "Extended durability with newer agents",
            "Reduced surgical intervention rates",
        ],
        manufacturers: Some(&[
            "Genentech/Roche",
            "Regeneron",
            "Novartis",
            "AbbVie",
        ]),
        image_alt: "Anti-VEGF intravitreal injection procedure",
    },
    Innovation {
        id: "eva-nexus",
        title: "EVA Nexus Surgical Platform",
        category: Category::Instruments,
        year: 2022,
        status: InnovationStatus::Emerging,
        impact: 8,
        summary: "Advanced vitrectomy platform with dual VacuFlow pumps — the only FDA-cleared system for subretinal injection.",
        description: "The EVA Nexus by DORC features dual VacuFlow VTi pumps with dynamic infusion that responds in real-time to maintain physiologic intraocular pressure. Its unique subretinal injection capability (the only FDA-cleared platform for this) positions it as essential for emerging gene therapy delivery. The system supports 25g, 27g, and experimental 28g instrumentation with cut rates up to 30,000 cpm using dual-blade technology.",
        key_benefits: &[
            "Only FDA-cleared subretinal injection platform",
            "Dynamic IOP-responsive infusion",
            "Up to 30,000 cuts per minute",
            "Essential for gene therapy delivery",
        ],
        manufacturers: Some(&[
            "DORC (Dutch Ophthalmic Research Center)",
        ]),
        image_alt: "EVA Nexus surgical console and handpieces",
    },
    Innovation {
        id: "ai-diagnostics",
        title: "AI-Powered Retinal Diagnostics",
        category: Category::Ai,
        year: 2018,
        status: InnovationStatus::Emerging,
        impact: 9,
        summary: "FDA-approved autonomous AI systems for diabetic retinopathy screening and emerging applications in surgical planning.",
        description: "AI diagnostic systems have achieved FDA approval for autonomous diabetic retinopathy screening: IDx-DR (Digital Diagnostics) was the first in 2018, followed by EyeArt (EyeNuk). These systems analyze fundus photographs without ophthalmologist oversight. Emerging applications include Deepeye for AMD activity identification from OCT, attention-gated CNNs achieving 93.4% accuracy for central serous retinopathy leakage detection (surpassing ophthalmologists at 89.7%), and AI-assisted surgical planning combining OCT and fundus data for robotic procedures.",
        key_benefits: &[
            "Autonomous screening without specialist oversight",
            "Detection accuracy surpassing human graders",
            "Scalable screening for underserved populations",
            "Emerging surgical planning applications",
        ],
        manufacturers: Some(&[
            "Digital Diagnostics",
            "EyeNuk",
            "Google Health",
        ]),
        image_alt: "AI analysis overlay on retinal fundus photograph",
    },
    Innovation {
        id: "chandelier",
        title: "Chandelier Endoillumination",
        category: Category::Instruments,
        year: 2008,
        status: InnovationStatus::Established,
        impact: 7,
        summary: "Fixed-position, hands-free illumination enabling bimanual surgical techniques during vitrectomy.",
        description: "Chandelier illumination systems provide wide-angle, panoramic illumination through a fixed scleral port, freeing both of the surgeon's hands for instrument manipulation. This enables critical bimanual techniques such as bimanual membrane peeling, complex scleral buckle placement during vitrectomy, and simultaneous use of scissors and forceps. Modern fiber-optic and LED chandelier systems offer adjustable intensity and color temperature with minimal heat generation.",
        key_benefits: &[
            "Enables bimanual surgical techniques",
            "Panoramic wide-angle illumination",
            "Adjustable intensity and color temperature",
            "Reduced operative complexity",
        ],
        manufacturers: Some(&[
            "Synergetics",
            "Alcon",
            "DORC",
        ]),
        image_alt: "Chandelier endoillumination probe providing wide-field lighting",
    },
    Innovation {
        id: "gene-therapy",
        title: "Subretinal Gene Therapy Delivery",
        category: Category::Pharmaceuticals,
        year: 2017,
        status: InnovationStatus::Emerging,
        impact: 10,
        summary: "Surgical delivery of gene therapy vectors to treat inherited retinal dystrophies, beginning a new era in ophthalmology.",
        description: "Luxturna (voretigene neparvovec), approved in 2017, was the first FDA-approved gene therapy for a genetic disease — treating RPE65-mediated inherited retinal dystrophy. The procedure requires precise subretinal injection to deliver AAV vectors beneath the neurosensory retina. Active clinical trials target additional conditions including choroideremia, X-linked retinitis pigmentosa, achromatopsia, and Leber hereditary optic neuropathy. The technique demands exceptional precision, driving adoption of robotic surgical systems and specialized injection platforms.",
        key_benefits: &[
            "First curative treatment for inherited blindness",
            "Growing pipeline targeting 30+ retinal conditions",
            "Driving innovation in precision delivery systems",
            "Paradigm shift from management to cure",
        ],
        manufacturers: Some(&[
            "Spark Therapeutics",
            "AGTC",
            "MeiraGTx",
        ]),
        image_alt: "Subretinal injection delivering gene therapy vector",
    },
    Innovation {
        id: "wide-angle",
        title: "Wide-Angle Viewing Systems",
        category: Category::Visualization,
        year: 2005,
        status: InnovationStatus::Established,
        impact: 8,
        summary: "Non-contact panoramic viewing systems providing 120-130 degree visualization of the retinal periphery.",
        description: "Wide-angle viewing systems such as the BIOM (Binocular Indirect Ophthalmomicroscope) and Resight enable panoramic, non-contact visualization of the retina during vitrectomy. These systems replaced older contact lens-based viewing, providing up to 130-degree field of view without the need for an assistant to hold a lens. Combined with 3D visualization systems, they allow the surgeon to see from the macula to the ora serrata simultaneously, critical for complex retinal detachment repair and peripheral pathology.",
        key_benefits: &[
            "120-130 degree panoramic view",
            "Non-contact, no assistant needed",
            "Critical for peripheral retinal work",
            "Compatible with 3D visualization",
        ],
        manufacturers: Some(&[
            "Oculus (BIOM)",
            "Zeiss (Resight)",
            "Volk",
        ]),
        image_alt: "Wide-angle view of retina through BIOM system",
    },
];
