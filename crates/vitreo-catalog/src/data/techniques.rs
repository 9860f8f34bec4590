//! Technique records

use vitreo_types::{Complexity, Technique, TechniqueCategory};

/// Techniques in editorial order
pub static TECHNIQUES: &[Technique] = &[
    Technique {
        id: "ppv",
        name: "Pars Plana Vitrectomy (PPV)",
        category: TechniqueCategory::Vitrectomy,
        complexity: Complexity::Intermediate,
        description: "The fundamental vitreoretinal procedure involving removal of vitreous gel through small-gauge ports inserted at the pars plana. Modern PPV uses 25g or 27g instrumentation with high-speed cutters, endoillumination, and wide-angle viewing. It is the gateway procedure for accessing the retinal surface for membrane peeling, retinal detachment repair, and subretinal surgery.",
        indications: &[
            "Vitreous hemorrhage",
            "Epiretinal membrane",
            "Macular hole",
            "Retinal detachment",
            "Retained lens fragments",
            "Endophthalmitis",
        ],
        steps: &[
            "Trocar/cannula insertion at pars plana (3.5-4mm from limbus)",
            "Core vitrectomy with high-speed cutter",
            "Posterior vitreous detachment induction (if not present)",
            "Peripheral vitreous shaving under scleral depression",
            "Address primary pathology (membrane peel, laser, etc.)",
            "Fluid-air exchange or tamponade injection",
            "Trocar removal and wound inspection",
        ],
        related_innovation_ids: &[
            "27g-vitrectomy",
            "ioct",
            "3d-hud",
            "wide-angle",
        ],
        success_rate: Some("90-95%"),
    },
    Technique {
        id: "scleral-buckle",
        name: "Scleral Buckling",
        category: TechniqueCategory::RetinalDetachment,
        complexity: Complexity::Advanced,
        description: "External approach to retinal detachment repair using a silicone band or sponge sutured to the sclera. The buckle indents the eye wall inward, closing retinal breaks by approximating the retinal pigment epithelium to the detached neurosensory retina. Often combined with cryotherapy to create a chorioretinal adhesion. Remains the gold standard for simple rhegmatogenous retinal detachments in young phakic patients.",
        indications: &[
            "Rhegmatogenous retinal detachment (especially in young/phakic patients)",
            "Inferior retinal breaks",
            "Dialysis-related detachments",
            "Pediatric retinal detachment",
        ],
        steps: &[
            "360-degree conjunctival peritomy",
            "Isolation of rectus muscles with bridle sutures",
            "Localization of retinal breaks with indirect ophthalmoscopy",
            "Cryotherapy application to retinal breaks",
            "Buckle element selection and positioning",
            "Scleral suture placement (mattress sutures)",
            "Drainage of subretinal fluid (if indicated)",
            "Buckle tightening and break confirmation",
        ],
        related_innovation_ids: &[
            "chandelier",
        ],
        success_rate: Some("85-90%"),
    },
    Technique {
        id: "membrane-peel",
        name: "Membrane Peeling (ERM/ILM)",
        category: TechniqueCategory::Macular,
        complexity: Complexity::Advanced,
        description: "Microsurgical removal of epiretinal membranes (ERM) or internal limiting membrane (ILM) from the macular surface. Requires exceptional precision as the target tissue is only 1-4 micrometers thick. ILM peeling has become standard for macular hole surgery, and dye-assisted techniques using indocyanine green (ICG) or Brilliant Blue G improve membrane visualization.",
        indications: &[
            "Symptomatic epiretinal membrane",
            "Macular hole (ILM peel)",
            "Vitreomacular traction",
            "Macular edema with tractional component",
        ],
        steps: &[
            "Standard 3-port PPV setup",
            "Core and peripheral vitrectomy",
            "Dye application (ICG or Brilliant Blue G) for membrane staining",
            "Membrane edge identification and initiation",
            "Controlled circumferential peeling with ILM forceps",
            "iOCT confirmation of complete membrane removal",
            "Tamponade selection (gas or air for macular holes)",
        ],
        related_innovation_ids: &[
            "ioct",
            "27g-vitrectomy",
            "preceyes",
        ],
        success_rate: Some("90-97% (macular hole closure)"),
    },
    Technique {
        id: "pneumatic-retinopexy",
        name: "Pneumatic Retinopexy",
        category: TechniqueCategory::RetinalDetachment,
        complexity: Complexity::Basic,
        description: "Office-based procedure for select retinal detachments using intravitreal gas injection and cryotherapy or laser. A gas bubble is injected to tamponade the retinal break, and the patient maintains specific head positioning to keep the bubble against the break. Advantages include outpatient setting, reduced cost, and avoidance of operating room resources.",
        indications: &[
            "Superior retinal breaks (8-4 o'clock)",
            "Single or clustered breaks within 1 clock hour",
            "Phakic patients with uncomplicated detachment",
            "Good patient compliance for positioning",
        ],
        steps: &[
            "Confirm break location with indirect ophthalmoscopy",
            "Cryotherapy to retinal break(s)",
            "Intravitreal gas injection (SF6 or C3F8)",
            "Patient positioning (break at highest point)",
            "Laser retinopexy (if needed, 1-2 days post-injection)",
            "Positioning maintained for 5-10 days",
        ],
        related_innovation_ids: &[],
        success_rate: Some("75-85% (single procedure)"),
    },
    Technique {
        id: "macular-hole-surgery",
        name: "Macular Hole Surgery",
        category: TechniqueCategory::Macular,
        complexity: Complexity::Advanced,
        description: "Vitrectomy-based procedure to close full-thickness macular holes. The standard technique involves vitrectomy, ILM peeling around the hole, and gas tamponade. For large or chronic holes, the inverted ILM flap technique significantly improved closure rates. Face-down positioning remains debated, with recent evidence suggesting shorter positioning durations may be equally effective for smaller holes.",
        indications: &[
            "Full-thickness macular hole (Stage 2-4)",
            "Traumatic macular hole",
            "Myopic macular hole (with or without detachment)",
        ],
        steps: &[
            "25g or 27g pars plana vitrectomy",
            "PVD induction if not present",
            "ILM staining with Brilliant Blue G",
            "ILM peeling (standard or inverted flap technique)",
            "Fluid-air exchange",
            "Gas tamponade (SF6 20% or C3F8 14%)",
            "Face-down positioning (duration varies by surgeon preference)",
        ],
        related_innovation_ids: &[
            "ioct",
            "27g-vitrectomy",
            "3d-hud",
        ],
        success_rate: Some("92-97% closure rate"),
    },
    Technique {
        id: "diabetic-trd",
        name: "Diabetic Traction Detachment Repair",
        category: TechniqueCategory::Diabetic,
        complexity: Complexity::Advanced,
        description: "Complex vitrectomy for tractional retinal detachments caused by proliferative diabetic retinopathy. Fibrovascular membranes are carefully dissected from the retinal surface using segmentation, delamination, and en-bloc techniques. These are among the most challenging vitreoretinal procedures due to the vascularity of the membranes and risk of iatrogenic breaks. Bimanual techniques with chandelier illumination are frequently employed.",
        indications: &[
            "Tractional retinal detachment involving macula",
            "Combined tractional-rhegmatogenous detachment",
            "Non-clearing vitreous hemorrhage with traction",
            "Progressive fibrovascular proliferation",
        ],
        steps: &[
            "25g or 27g PPV with chandelier endoillumination",
            "Core vitrectomy avoiding traction on membranes",
            "Membrane segmentation (cutting between epicenters)",
            "Membrane delamination (separating from retinal surface)",
            "Hemostasis with endodiathermy or raised IOP",
            "Peripheral vitreous removal and endolaser",
            "Tamponade selection (silicone oil for severe cases)",
        ],
        related_innovation_ids: &[
            "27g-vitrectomy",
            "chandelier",
            "3d-hud",
            "wide-angle",
        ],
        success_rate: Some("85-90% anatomical success"),
    },
    Technique {
        id: "endolaser",
        name: "Endolaser Photocoagulation",
        category: TechniqueCategory::Other,
        complexity: Complexity::Intermediate,
        description: "Intraoperative laser application to the retina using a fiber-optic probe inserted through a vitrectomy port. Used to create chorioretinal adhesions around retinal breaks, treat ischemic retina in diabetic disease, and seal retinal tears. Modern systems offer multiple wavelengths (532nm green, 577nm yellow) and pattern scanning capabilities for efficient treatment delivery.",
        indications: &[
            "Retinal break treatment during vitrectomy",
            "Panretinal photocoagulation for proliferative diabetic retinopathy",
            "Retinopexy around drainage sites",
            "Treatment of peripheral retinal ischemia",
        ],
        steps: &[
            "Select appropriate probe (straight, curved, or illuminated)",
            "Set laser parameters (power, duration, spot size)",
            "Apply treatment to target area under wide-angle viewing",
            "Achieve adequate whitening response",
            "Treat 360 degrees for PRP or focal for breaks",
        ],
        related_innovation_ids: &[
            "wide-angle",
            "27g-vitrectomy",
        ],
        success_rate: Some("Standard adjunctive procedure"),
    },
    Technique {
        id: "silicone-oil",
        name: "Silicone Oil Tamponade",
        category: TechniqueCategory::Other,
        complexity: Complexity::Intermediate,
        description: "Long-acting internal tamponade using medical-grade silicone oil for complex retinal detachments requiring extended support. Unlike gas tamponade, silicone oil provides indefinite support but requires a second surgery for removal. Used in cases with inferior breaks (where gas is less effective), giant retinal tears, severe PVR, and patients unable to maintain positioning. Heavy silicone oil (Densiron 68) is available for inferior pathology.",
        indications: &[
            "Complex retinal detachment with PVR",
            "Giant retinal tears",
            "Inferior retinal pathology",
            "Patients unable to position (one-eyed, pediatric)",
            "Traumatic retinal detachment",
        ],
        steps: &[
            "Complete vitrectomy with retinal reattachment",
            "Fluid-air exchange",
            "Air-silicone oil exchange via viscous injection",
            "Confirm retinal reattachment under oil",
            "IOP check and adjustment",
            "Plan removal surgery (typically 3-6 months later)",
        ],
        related_innovation_ids: &[
            "27g-vitrectomy",
            "wide-angle",
        ],
        success_rate: Some("Adjunctive — improves complex case outcomes"),
    },
];
