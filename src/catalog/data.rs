//! The compiled-in welding catalog.
//!
//! Records are transcribed in authored order and built once, on first access,
//! into a process-wide `LazyLock`. Every accessor hands out a shared view of
//! that single table; nothing mutates it afterwards. Process names inside
//! characteristics and scenarios are descriptive text and are kept exactly as
//! written, including names with no matching process record.

use crate::catalog::model::{
    CATALOG_SCHEMA_VERSION, Characteristic, Parameter, Scenario, TipSection, WeldCatalog,
    WeldingProcess,
};
use std::sync::LazyLock;

static CATALOG: LazyLock<WeldCatalog> = LazyLock::new(|| WeldCatalog {
    schema_version: CATALOG_SCHEMA_VERSION.to_string(),
    processes: authored_processes(),
    characteristics: authored_characteristics(),
    scenarios: authored_scenarios(),
    parameters: authored_parameters(),
    tip_sections: authored_tip_sections(),
});

/// The whole built-in catalog.
pub fn catalog() -> &'static WeldCatalog {
    &CATALOG
}

/// Standard, Pulsed, LSC, PMC and CMT, in that order.
pub fn processes() -> &'static [WeldingProcess] {
    &CATALOG.processes
}

pub fn characteristics() -> &'static [Characteristic] {
    &CATALOG.characteristics
}

pub fn scenarios() -> &'static [Scenario] {
    &CATALOG.scenarios
}

/// Primary parameters come first, then the secondary ones.
pub fn parameters() -> &'static [Parameter] {
    &CATALOG.parameters
}

pub fn tip_sections() -> &'static [TipSection] {
    &CATALOG.tip_sections
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn process(
    name: &str,
    short_name: &str,
    description: &str,
    how_it_works: &str,
    best_for: &[&str],
    pros: &[&str],
    cons: &[&str],
) -> WeldingProcess {
    WeldingProcess {
        name: name.to_string(),
        short_name: short_name.to_string(),
        description: description.to_string(),
        how_it_works: how_it_works.to_string(),
        best_for: strings(best_for),
        pros: strings(pros),
        cons: strings(cons),
    }
}

fn characteristic(
    name: &str,
    processes: &[&str],
    description: &str,
    tags: &[&str],
) -> Characteristic {
    Characteristic {
        name: name.to_string(),
        processes: strings(processes),
        description: description.to_string(),
        tags: strings(tags),
    }
}

fn scenario(
    situation: &str,
    recommended_process: &str,
    recommended_characteristic: &str,
    notes: &str,
    tags: &[&str],
    tips: &[&str],
) -> Scenario {
    Scenario {
        situation: situation.to_string(),
        recommended_process: recommended_process.to_string(),
        recommended_characteristic: recommended_characteristic.to_string(),
        notes: notes.to_string(),
        tags: strings(tags),
        tips: strings(tips),
    }
}

fn primary(symbol: &str, name: &str, description: &str) -> Parameter {
    Parameter {
        symbol: symbol.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        is_primary: true,
    }
}

fn secondary(symbol: &str, name: &str, description: &str) -> Parameter {
    Parameter {
        is_primary: false,
        ..primary(symbol, name, description)
    }
}

fn tip_section(title: &str, icon: &str, tips: &[&str]) -> TipSection {
    TipSection {
        title: title.to_string(),
        icon: icon.to_string(),
        tips: strings(tips),
    }
}

fn authored_processes() -> Vec<WeldingProcess> {
    vec![
        process(
            "Standard",
            "Standard",
            "Traditional MIG - dip transfer at low power, spray at high power",
            "Standard MIG/MAG across entire power range. Dip transfer at low power, intermediate arc in the middle (more spatter), spray arc at high power.",
            &["Basic jobs", "When you want it to feel like a normal welder", "Thick plate"],
            &["Familiar feel", "Simple to understand", "Good for heavy work"],
            &["More spatter than advanced modes", "Less control"],
        ),
        process(
            "Pulsed",
            "Pulsed",
            "Pulses between high/low current for controlled droplet transfer",
            "Base current phase keeps arc barely stable and preheats workpiece. Pulsing current phase delivers precisely dosed pulse to detach one droplet of weld material.",
            &["Cleaner welds", "Thinner material", "Out of position work"],
            &["Less spatter", "Better control", "Works across full power range"],
            &["Slightly more complex", "Can feel different to traditional MIG"],
        ),
        process(
            "LSC (Low Spatter Control)",
            "LSC",
            "Modified short-circuit that drops current before the arc re-ignites",
            "Before the short circuit bridge breaks, the current is LOWERED. Re-ignition happens at significantly lower current values. Result: way less spatter.",
            &["Sheet metal", "Visible welds", "When you hate cleaning spatter"],
            &["Minimal spatter", "Clean welds", "Great for thin material"],
            &["Lower deposition rates", "Limited to dip transfer range"],
        ),
        process(
            "PMC (Pulse Multi Control)",
            "PMC",
            "Advanced pulse with penetration & arc length stabilizers",
            "Pulsed arc with high-speed data processing. Adds penetration stabilizer and arc length stabilizer for improved control. Machine constantly adjusts for optimal results.",
            &["High-quality work", "Faster travel speeds", "Most versatile option"],
            &["Stable arc", "Even penetration", "Fast travel speeds", "Very versatile"],
            &["Requires understanding of settings", "Premium feature"],
        ),
        process(
            "CMT (Cold Metal Transfer)",
            "CMT",
            "Wire physically reverses 170 times/second for ultra-low heat",
            "The wire moves back and forth (reverses) at up to 170 Hz. This controlled droplet detachment during short circuit keeps current low. Result: virtually spatter-free with minimal heat input.",
            &["Thin sheet", "Galvanized", "Aluminum", "Gap bridging", "Brazing"],
            &["Lowest heat input", "Almost no spatter", "Bridges gaps", "Minimal distortion"],
            &["Requires special CMT drive unit", "Lower deposition rate", "Slower"],
        ),
    ]
}

fn authored_characteristics() -> Vec<Characteristic> {
    vec![
        // Most commonly used
        characteristic(
            "universal",
            &["CMT", "PMC", "Puls", "Standard"],
            "The GO-TO setting for ALL standard welding tasks.",
            &["default", "general", "standard", "all-purpose"],
        ),
        characteristic(
            "dynamic",
            &["CMT", "PMC", "Puls", "Standard"],
            "DEEP penetration, reliable root fusion at HIGH welding speeds.",
            &["penetration", "fast", "root", "hot"],
        ),
        characteristic(
            "root",
            &["CMT", "LSC", "Standard"],
            "For ROOT PASSES with powerful arc.",
            &["root", "gap", "open root", "first pass"],
        ),
        characteristic(
            "open root",
            &["LSC", "CMT"],
            "POWERFUL arc for ROOT PASSES with air gap.",
            &["root", "gap", "air gap", "open"],
        ),
        characteristic(
            "gap bridging",
            &["CMT", "PMC"],
            "BEST gap-bridging ability due to VERY LOW heat input.",
            &["gap", "poor fitup", "bridging", "low heat"],
        ),
        characteristic(
            "galvanized",
            &["CMT", "LSC", "PMC", "Puls", "Standard"],
            "For GALVANIZED sheet - LOW risk of zinc pores and reduced penetration.",
            &["galvanized", "zinc", "coated", "sheet"],
        ),
        characteristic(
            "cladding",
            &["CMT", "LSC", "PMC"],
            "OVERLAY welding - LOW penetration, LOW dilution, WIDE weld seam, improved wetting.",
            &["overlay", "cladding", "buildup", "wide bead"],
        ),
        characteristic(
            "pipe",
            &["PMC", "Pulse", "Standard"],
            "For PIPE applications and positional welding on narrow gap applications.",
            &["pipe", "positional", "narrow gap"],
        ),
        characteristic(
            "retro",
            &["CMT", "Puls", "PMC", "Standard"],
            "Same weld properties as the old TransPuls Synergic (TPS) series. Legacy mode.",
            &["legacy", "old", "transpuls", "classic"],
        ),

        // AC modes
        characteristic(
            "AC additive",
            &["PMC", "CMT"],
            "For bead-on-bead on adaptive structures. Flips polarity to keep heat LOW but still get HIGH deposition. More stable arc.",
            &["AC", "additive", "low heat", "deposition"],
        ),
        characteristic(
            "AC heat control",
            &["PMC", "CMT"],
            "Flips polarity to keep heat into workpiece LOW. You can fine-tune heat with correction parameters.",
            &["AC", "heat control", "low heat"],
        ),
        characteristic(
            "AC universal",
            &["PMC", "CMT"],
            "Flips polarity to keep heat LOW. Good for ALL standard welding tasks.",
            &["AC", "universal", "low heat"],
        ),

        // ADV modes
        characteristic(
            "additive",
            &["CMT"],
            "Reduced heat, greater stability, HIGHER deposition rate. For bead-on-bead on adaptive structures.",
            &["additive", "deposition", "buildup"],
        ),
        characteristic(
            "ADV (CMT)",
            &["CMT"],
            "Needs inverter module. Alternating current process. Negative polarity phase = LOW heat + HIGH deposition.",
            &["ADV", "advanced", "AC", "deposition"],
        ),
        characteristic(
            "ADV (LSC)",
            &["LSC"],
            "Needs electronic switch. Maximum current reduction by opening circuit in each process phase. Only works with TPS 400i LSC ADV.",
            &["ADV", "advanced", "LSC", "low spatter"],
        ),
        characteristic(
            "ADV braze",
            &["CMT"],
            "For BRAZING - reliable wetting, good flow of braze material. Almost NO spatter in dip transfer. Good for long hosepacks.",
            &["braze", "brazing", "ADV"],
        ),
        characteristic(
            "ADV root",
            &["LSC Advanced"],
            "For ROOT PASSES with powerful arc. Almost no spatter in dip transfer. Good for long hosepacks.",
            &["root", "ADV", "advanced"],
        ),
        characteristic(
            "ADV universal",
            &["LSC Advanced"],
            "For ALL standard tasks. Almost no spatter in dip transfer. Good for long hosepacks.",
            &["universal", "ADV", "advanced"],
        ),

        // Specialty
        characteristic(
            "arc blow",
            &["PMC"],
            "Avoids arc breaks from arc blow (magnetic issues).",
            &["arc blow", "magnetic", "arc problems"],
        ),
        characteristic(
            "arcing",
            &["Standard"],
            "For HARDFACING on wet or dry surfaces. Think grinding rollers, sugar/ethanol industries.",
            &["hardfacing", "arcing", "wear"],
        ),
        characteristic(
            "base",
            &["Standard"],
            "Same as arcing - hardfacing on wet/dry surfaces.",
            &["hardfacing", "base", "wear"],
        ),
        characteristic(
            "braze",
            &["CMT", "LSC", "PMC"],
            "For BRAZING - reliable wetting, good braze flow.",
            &["braze", "brazing"],
        ),
        characteristic(
            "braze+",
            &["CMT"],
            "Brazing with special Braze+ gas nozzle. HIGH brazing speed (narrow opening, high flow rate).",
            &["braze", "brazing", "fast"],
        ),
        characteristic(
            "CC/CV",
            &["CC/CV"],
            "Constant Current OR Constant Voltage curve. For running with power supply unit - NO wirefeeder needed.",
            &["CC", "CV", "constant current", "constant voltage"],
        ),
        characteristic(
            "constant current",
            &["PMC"],
            "Constant current mode. For when you DON'T need arc length control (stickout changes won't be compensated).",
            &["constant current", "CC"],
        ),
        characteristic(
            "CW additive",
            &["PMC", "ConstantWire"],
            "Constant wire speed for additive production. NO ARC - wire is just fed as filler metal.",
            &["constant wire", "additive", "no arc"],
        ),
        characteristic(
            "dynamic +",
            &["PMC"],
            "SHORT arc length for HIGH welding speeds. Arc length control is independent of material surface.",
            &["dynamic", "fast", "short arc"],
        ),
        characteristic(
            "edge",
            &["CMT"],
            "For CORNER SEAMS - targeted energy input, high welding speed.",
            &["corner", "edge", "seam"],
        ),
        characteristic(
            "flanged edge",
            &["CMT"],
            "For FLANGE WELDS - targeted energy input, high welding speed.",
            &["flange", "edge"],
        ),
        characteristic(
            "galvannealed",
            &["PMC"],
            "For iron-zinc-coated material surfaces.",
            &["galvannealed", "zinc", "coated"],
        ),
        characteristic(
            "hotspot",
            &["CMT"],
            "Hot start sequence for PLUG WELDS and MIG/MAG SPOT WELD joints.",
            &["plug weld", "spot weld", "hotspot"],
        ),

        // LaserHybrid
        characteristic(
            "LH fillet weld",
            &["PMC"],
            "For LaserHybrid FILLET WELD applications (laser + MIG/MAG).",
            &["laser", "hybrid", "fillet"],
        ),
        characteristic(
            "LH flange weld",
            &["PMC"],
            "For LaserHybrid CORNER WELD applications (laser + MIG/MAG).",
            &["laser", "hybrid", "flange", "corner"],
        ),
        characteristic(
            "LH Inductance",
            &["PMC"],
            "For LaserHybrid with HIGH welding circuit inductance (laser + MIG/MAG).",
            &["laser", "hybrid", "inductance"],
        ),
        characteristic(
            "LH lap joint",
            &["PMC", "CMT"],
            "For LaserHybrid LAP JOINT applications (laser + MIG/MAG).",
            &["laser", "hybrid", "lap"],
        ),
        characteristic(
            "marking",
            &[],
            "For MARKING electrically conductive surfaces.",
            &["marking", "etching"],
        ),

        // Mix modes (ripple effect)
        characteristic(
            "mix (PMC)",
            &["PMC"],
            "Needs Pulse + PMC packages. Creates RIPPLED WELD - heat controlled by cycling between pulsed and dip transfer arc.",
            &["mix", "ripple", "TIG look"],
        ),
        characteristic(
            "mix (CMT)",
            &["CMT"],
            "Needs CMT drive unit + WF 60i Robacta Drive CMT. Creates RIPPLED WELD - cycles between pulsed arc and CMT.",
            &["mix", "ripple", "TIG look"],
        ),
        characteristic(
            "mix drive",
            &["PMC"],
            "Needs PushPull drive unit. Creates RIPPLED WELD by cycling pulsed process with extra wire movement.",
            &["mix", "ripple", "TIG look"],
        ),
        characteristic(
            "multi arc",
            &["PMC"],
            "For when MULTIPLE ARCS influence each other. Good for increased circuit inductance or mutual welding circuit coupling.",
            &["multi arc", "tandem", "inductance"],
        ),

        // PCS modes
        characteristic(
            "PCS",
            &["PMC"],
            "Switches from pulsed arc to concentrated SPRAY ARC above a certain power. Combines advantages of both in one setting.",
            &["PCS", "spray", "pulse"],
        ),
        characteristic(
            "PCS mix",
            &["PMC"],
            "Cycles between pulsed and spray arc to dip transfer, depending on power range. Great for VERTICAL-UP welds (hot/cold alternating).",
            &["PCS", "vertical", "positional"],
        ),

        // Pin modes
        characteristic(
            "pin",
            &["CMT"],
            "For welding BRADS/STUDS to conductive surfaces. Wire retraction and current curve define pin appearance.",
            &["pin", "stud", "brad"],
        ),
        characteristic(
            "pin picture",
            &["CMT"],
            "For welding brads with SPHERICAL END - for creating pin pictures.",
            &["pin", "picture", "art"],
        ),
        characteristic(
            "pin print",
            &["CMT"],
            "For writing TEXTS, PATTERNS, or MARKINGS by positioning individual dots.",
            &["pin", "print", "marking", "text"],
        ),
        characteristic(
            "pin spike",
            &["CMT"],
            "For welding brads with POINTED ENDS onto conductive surfaces.",
            &["pin", "spike", "pointed"],
        ),

        // Pipe specific
        characteristic(
            "pipe cladding",
            &["PMC", "CMT"],
            "OVERLAY welding on outer pipe claddings - little penetration, low dilution, wide weld seam.",
            &["pipe", "cladding", "overlay"],
        ),
        characteristic(
            "ripple drive",
            &["PMC"],
            "Needs CMT drive unit. Creates RIPPLED WELD (TIG-like appearance) by cycling pulsed process with wire movement.",
            &["ripple", "TIG look", "stacked dimes"],
        ),
        characteristic(
            "seam track",
            &["PMC", "Pulse"],
            "Amplified current control for use with SEAM TRACKING systems with external current measurement.",
            &["seam tracking", "automation", "robot"],
        ),
        characteristic(
            "TIME",
            &["PMC"],
            "For VERY LONG STICKOUT with TIME shielding gases. Increases deposition rate. (TIME = Transferred Ionized Molten Energy)",
            &["TIME", "long stickout", "deposition"],
        ),

        // TWIN (Tandem)
        characteristic(
            "TWIN cladding",
            &["PMC"],
            "MIG/MAG TANDEM - overlay welding with low penetration, low dilution, wide weld seam.",
            &["twin", "tandem", "cladding"],
        ),
        characteristic(
            "TWIN multi arc",
            &["PMC"],
            "MIG/MAG TANDEM - for when multiple arcs influence each other. Good for circuit inductance/coupling issues.",
            &["twin", "tandem", "multi arc"],
        ),
        characteristic(
            "TWIN PCS",
            &["PMC"],
            "MIG/MAG TANDEM - switches from pulsed to spray arc above certain power. Arcs NOT synchronized.",
            &["twin", "tandem", "PCS"],
        ),
        characteristic(
            "TWIN universal",
            &["PMC", "Pulse", "CMT"],
            "MIG/MAG TANDEM - for all standard tasks. Optimized for mutual magnetic arc interaction. Arcs NOT synchronized.",
            &["twin", "tandem", "universal"],
        ),
        characteristic(
            "weld+",
            &["CMT"],
            "For welding with SHORT STICKOUT and Braze+ gas nozzle (small opening, high flow velocity).",
            &["weld+", "short stickout", "braze nozzle"],
        ),
    ]
}

fn authored_scenarios() -> Vec<Scenario> {
    vec![
        scenario(
            "General steel fabrication",
            "PMC",
            "universal",
            "Your bread and butter - works for most steel jobs",
            &["steel", "general", "fabrication"],
            &[
                "Start with arc length at 0, adjust ±2 if needed",
                "Dynamics around middle - increase for mill scale",
                "15-20° drag angle for good penetration",
                "3/4\" stickout is typical",
            ],
        ),
        scenario(
            "Thin gauge sheet (<2mm)",
            "CMT or LSC",
            "universal or galvanized",
            "Low heat = less burn-through and warping",
            &["thin", "sheet", "gauge"],
            &[
                "Keep arc length SHORT (-2 to -3) to focus heat",
                "Dynamics LOW to reduce dig",
                "Move FAST - don't let heat build up",
                "Tack frequently to control warping",
                "CMT if you're still burning through with LSC",
            ],
        ),
        scenario(
            "Root pass with gap",
            "LSC or CMT",
            "root or open root",
            "Powerful arc, handles gaps well",
            &["root", "gap", "first pass"],
            &[
                "Arc length: LONGER (+2 to +4) for bigger gaps",
                "Watch the keyhole - fill it as you go",
                "Increase I-S (hot start) if starts lack fusion",
                "Travel speed: not too slow or you'll burn through",
                "Bump dynamics DOWN if blowing holes",
            ],
        ),
        scenario(
            "Fill & cap passes",
            "PMC",
            "dynamic or universal",
            "Good penetration with fast travel speeds",
            &["fill", "cap", "cover"],
            &[
                "Use 'dynamic' for more penetration into root",
                "Weave or stringer - match to joint width",
                "Watch tie-ins at toes - avoid undercut",
                "Slight drag angle (10-15°) for caps",
                "Let previous pass cool if stacking",
            ],
        ),
        scenario(
            "Vertical up",
            "PMC",
            "PCS mix",
            "Hot/cold cycling helps build a shelf",
            &["vertical", "uphill", "positional"],
            &[
                "PCS mix cycles hot/cold - puddle freezes on cold phase",
                "Small weave, pause at toes to fill",
                "Keep arc on leading edge of puddle",
                "If puddle drips: speed up or lower heat",
                "Dynamics moderate - too high and it drips",
            ],
        ),
        scenario(
            "Aluminum",
            "Pulsed or CMT",
            "universal",
            "CMT for thin, pulse for thick",
            &["aluminum", "aluminium", "alloy"],
            &[
                "CLEAN the aluminum - wire brush or acetone",
                "Pure argon gas only",
                "Push angle (10-15°) - never drag on aluminum",
                "Preheat thick sections to prevent cracking",
                "CMT for thin stuff - lowest heat possible",
            ],
        ),
        scenario(
            "Stainless - General",
            "PMC",
            "universal",
            "Keep heat LOW to avoid sugaring. Use tri-mix or 98/2 gas.",
            &["stainless", "SS", "304", "316", "general"],
            &[
                "Gas: tri-mix or 98% Ar / 2% CO2",
                "Arc length SHORT (-2 to -4) - concentrate heat",
                "Travel FAST - don't let heat build",
                "Interpass temp max 300°F for 304/316",
                "Stainless brush only - no carbon contamination",
            ],
        ),
        scenario(
            "Stainless - Open Root",
            "LSC or CMT",
            "root or open root",
            "LSC gives control, CMT for thin wall. Back purge if you can!",
            &["stainless", "SS", "root", "open root", "pipe"],
            &[
                "BACK PURGE with argon - prevents sugaring",
                "Arc length SHORT (-2 to -4)",
                "Keyhole should be small and controlled",
                "CMT for thin wall pipe - less burn-through risk",
                "Dam both ends if purging pipe",
            ],
        ),
        scenario(
            "Stainless - Fill & Cap",
            "PMC",
            "dynamic or universal",
            "Watch interpass temp! Let it cool between passes. Stainless holds heat.",
            &["stainless", "SS", "fill", "cap", "cover"],
            &[
                "Let it COOL between passes - 300°F max",
                "Move faster than carbon steel",
                "Smaller weld pool than you'd expect",
                "Stringer beads often better than weave",
                "Check color - purple/blue means too hot",
            ],
        ),
        scenario(
            "Stainless - Thin Wall Pipe",
            "CMT",
            "universal or root",
            "CMT's low heat prevents burn-through and sugaring. Back purge critical!",
            &["stainless", "SS", "pipe", "thin wall", "tube"],
            &[
                "CMT is your best friend here - lowest heat",
                "Back purge is NON-NEGOTIABLE",
                "Tight keyhole, don't let it open up",
                "Travel speed: find the sweet spot",
                "If sugaring: more purge, less heat, faster travel",
            ],
        ),
        scenario(
            "Stainless - Avoiding Sugaring",
            "CMT or LSC",
            "universal",
            "Lower heat input = less oxidation on backside. Shorten arc length (-2 to -5).",
            &["stainless", "SS", "sugaring", "oxidation", "backside"],
            &[
                "Sugaring = oxidation from heat on backside",
                "Arc length SHORT (-2 to -5) - focus the heat",
                "CMT or LSC for lowest heat input",
                "Back purge with argon when possible",
                "Travel faster, smaller weld pool",
            ],
        ),
        scenario(
            "Galvanized material",
            "Any",
            "galvanized",
            "Reduces zinc blowout and porosity",
            &["galvanized", "zinc", "coated"],
            &[
                "Galvanized characteristic = optimized for zinc",
                "VENTILATION - zinc fumes are nasty",
                "Expect more spatter than bare steel",
                "Longer arc (+) helps zinc escape",
                "Grind zinc off if porosity is bad",
            ],
        ),
        scenario(
            "Brazing",
            "CMT",
            "braze or ADV braze",
            "Wire reversal helps braze material flow",
            &["braze", "brazing", "bronze"],
            &[
                "CMT wire reversal = perfect for brazing",
                "Keep heat LOW - you're flowing, not melting base",
                "Push angle to direct heat forward",
                "Braze wire (CuSi3 etc) not steel wire",
                "Clean joint - flux helps wetting",
            ],
        ),
        scenario(
            "Pretty TIG-looking beads",
            "PMC",
            "ripple drive or mix",
            "Creates stacked dime look. Or use SynchroPulse!",
            &["TIG", "pretty", "ripple", "stacked dimes", "synchropulse"],
            &[
                "Ripple drive or mix = wire cycles for ripple effect",
                "Alternative: SynchroPulse on any process",
                "Slow, steady travel for even ripples",
                "Match frequency to travel speed",
                "Clean material = cleaner looking bead",
            ],
        ),
        scenario(
            "SynchroPulse - Stacked Dimes",
            "PMC or Pulsed",
            "universal + SynchroPulse ON",
            "Enable SynchroPulse, set frequency 1-3 Hz, amplitude 20-40%.",
            &["synchropulse", "TIG", "ripple", "stacked dimes", "cosmetic"],
            &[
                "Enable: Process params → SynchroPulse → ON",
                "Frequency: 1.5-2.5 Hz for nice spacing",
                "Amplitude: 30-40% for visible ripple",
                "Match travel speed to frequency",
                "Slower = tighter ripples, faster = spread out",
            ],
        ),
        scenario(
            "Poor fit-up / big gaps",
            "CMT",
            "gap bridging",
            "Lowest heat = best gap bridging ability",
            &["gap", "fitup", "poor fit"],
            &[
                "CMT gap bridging = maximum forgiveness",
                "Arc length LONGER (+3 to +5) to bridge",
                "Dynamics LOW - don't blow through",
                "Weave to tie in both sides",
                "Multiple passes if gap is huge",
            ],
        ),
        scenario(
            "Overlay / hardfacing",
            "CMT or PMC",
            "cladding",
            "Low penetration, low dilution, wide bead",
            &["overlay", "hardfacing", "cladding", "buildup"],
            &[
                "Cladding = LOW penetration by design",
                "Wide weave for coverage",
                "Overlap passes 30-50%",
                "Keep it flat - gravity helps",
                "Preheat if hardfacing wire requires it",
            ],
        ),
        scenario(
            "Pipe welding",
            "PMC or Standard",
            "pipe",
            "Optimized for positional work around pipe",
            &["pipe", "tube", "positional"],
            &[
                "Pipe characteristic handles position changes",
                "6G = all positions - adjust as you go",
                "Uphill for root/hot pass typically",
                "Watch tie-ins at 6 o'clock",
                "Consistent travel speed around the clock",
            ],
        ),
        scenario(
            "Spot/plug welds",
            "CMT",
            "hotspot",
            "Hot start sequence for plug welds",
            &["spot", "plug", "tack"],
            &[
                "Hotspot = timed weld sequence",
                "Set spot time (SPt) for how long to weld",
                "Keep gun perpendicular to work",
                "Consistent pressure and position",
                "Good for sheet metal lap joints",
            ],
        ),
        scenario(
            "Arc blow problems",
            "PMC",
            "arc blow",
            "Prevents magnetic arc wander",
            &["arc blow", "magnetic", "wander"],
            &[
                "Arc blow = magnetic field pushing arc around",
                "This characteristic compensates for it",
                "Also try: move ground clamp position",
                "Weld toward your ground when possible",
                "DC issues - AC process eliminates it",
            ],
        ),
    ]
}

fn authored_parameters() -> Vec<Parameter> {
    vec![
        // Primary
        primary(
            "Thickness",
            "Material Thickness",
            "THE MAIN INPUT - machine calculates WFS, voltage, everything else from this. Set based on what you're welding.",
        ),
        primary(
            "Arc Length",
            "Arc Length Correction",
            "Makes arc longer (+) or shorter (-). Range is typically -10 to +10. SHORTER arc (-): more penetration, narrower bead, better for roots & stainless. LONGER arc (+): wider bead, more forgiving on gaps, less dig. Start at 0, adjust by 1-2 at a time.",
        ),
        primary(
            "Dynamics",
            "Dynamics / Arc Force",
            "How aggressive the arc responds. Turn UP for more dig (mill scale, dirty metal). Turn DOWN if too harsh/blowing holes.",
        ),

        // Secondary
        secondary(
            "GPr",
            "Gas Pre-flow",
            "How long gas flows BEFORE arc starts. Protects weld pool from contamination at start.",
        ),
        secondary(
            "GPo",
            "Gas Post-flow",
            "How long gas flows AFTER arc stops. Protects hot weld from atmosphere.",
        ),
        secondary(
            "I-S",
            "Starting Current",
            "Hot start current. Base material heats up FAST at weld start. Helps on cold/thick material.",
        ),
        secondary("t-S", "Starting Current Time", "HOW LONG the starting current phase lasts."),
        secondary(
            "SL1",
            "Slope 1 (Up-slope)",
            "How fast current RAMPS UP from start current to main welding current. Smooth transition in.",
        ),
        secondary(
            "I",
            "Welding Current",
            "The MAIN welding phase. Uniform heat into base material.",
        ),
        secondary(
            "I-E",
            "Final Current",
            "Crater fill current. Drops at END to prevent local overheating. Stops weld seam drop-through.",
        ),
        secondary(
            "t-E",
            "Final Current Time",
            "HOW LONG the final/crater fill current phase lasts.",
        ),
        secondary(
            "SL2",
            "Slope 2 (Down-slope)",
            "How fast welding current RAMPS DOWN to final current. Smooth crater fill.",
        ),
        secondary("Arc S", "Start Arc Length", "Arc length correction at START of weld."),
        secondary("Arc E", "End Arc Length", "Arc length correction at END of weld."),
        secondary("SPt", "Spot Welding Time", "For spot/tack welds - how long the weld runs."),
    ]
}

fn authored_tip_sections() -> Vec<TipSection> {
    vec![
        tip_section(
            "Arc Length Correction - When & How",
            "straighten",
            &[
                "Range is -10 to +10. Start at 0, adjust 1-2 at a time until it feels right.",
                "SHORTER arc (-1 to -5): Tighter, more focused arc. More penetration, narrower bead. Great for roots and stainless.",
                "LONGER arc (+1 to +5): Wider, softer arc. Better gap bridging, more forgiving. Good for fill passes and poor fit-up.",
                "Stubbing into the puddle? Go LONGER (+). Arc wandering/unstable? Go SHORTER (-).",
                "Stainless steel: Run SHORT (-2 to -5) to concentrate heat and reduce sugaring on backside.",
                "Open roots with gap: Try LONGER (+2 to +4) to help bridge without burning through.",
                "If you change wire stickout, you may need to re-adjust arc length to compensate.",
            ],
        ),
        tip_section(
            "Stainless Steel Tips",
            "science",
            &[
                "HEAT IS THE ENEMY. Stainless holds heat and wants to warp and sugar. Keep it cool.",
                "Use tri-mix (90% He, 7.5% Ar, 2.5% CO2) or 98% Ar / 2% CO2 for cleaner welds.",
                "Back purge your roots! Argon on the backside prevents sugaring (oxidation).",
                "Watch interpass temp - let it cool between passes. 300°F max for 304/316.",
                "Shorter arc length (-2 to -5) concentrates heat, reduces overall heat input.",
                "CMT or LSC for roots - the low heat input helps prevent burn-through and sugaring.",
                "PMC with 'universal' for fill/cap - but move FAST to keep heat input down.",
                "Stainless doesn't conduct heat away like carbon steel - smaller weld pool, faster travel.",
                "Wire brush with STAINLESS brush only. Carbon steel contamination = rust later.",
            ],
        ),
        tip_section(
            "Open Root Tips",
            "radio_button_unchecked",
            &[
                "LSC 'root' or 'open root' characteristic gives you a powerful, controllable arc.",
                "CMT 'root' for thin wall - the wire reversal helps bridge gaps without burn-through.",
                "Gap too big? Go LONGER arc (+) and slightly LOWER dynamics to reduce dig.",
                "Gap tight/no gap? SHORTER arc (-) for more penetration, bump dynamics UP slightly.",
                "Land too thick? Increase dynamics for more dig. Land too thin? Back off dynamics.",
                "Keyhole technique: Watch the back of the keyhole, not the front. Fill it as you go.",
                "Stainless roots: Back purge is critical! Argon dam or purge the whole pipe.",
                "Travel speed matters: Too slow = burn-through. Too fast = lack of fusion. Find the sweet spot.",
                "Hot start (I-S) helps on cold starts. Increase if your starts are cold/lack fusion.",
            ],
        ),
        tip_section(
            "Dynamics / Arc Force - Dialing It In",
            "offline_bolt",
            &[
                "Dynamics controls how hard the arc 'digs' and how it responds to changes.",
                "HIGHER dynamics: More aggressive arc, more penetration, punches through mill scale and dirt.",
                "LOWER dynamics: Softer arc, less dig, more forgiving on thin material and gaps.",
                "Blowing holes? Turn dynamics DOWN. Lack of fusion/cold lap? Turn dynamics UP.",
                "Dirty or rusty steel: Crank dynamics UP to burn through the crud.",
                "Clean material, good fit-up: Keep dynamics moderate or low for smooth arc.",
                "Vertical up: Moderate dynamics helps control the puddle without it dripping.",
                "Combined with arc length: Short arc + high dynamics = maximum penetration. Long arc + low dynamics = maximum forgiveness.",
            ],
        ),
        tip_section(
            "SynchroPulse - TIG-Look Ripple Beads",
            "waves",
            &[
                "SynchroPulse creates that stacked-dime TIG appearance by cycling between HIGH and LOW power.",
                "Works with: Standard, Pulsed, LSC, and PMC processes. Most common with PMC or Pulsed.",
                "ENABLE IT: Process parameters → SynchroPulse → turn it ON. Then set your frequency and amplitude.",
                "FREQUENCY (Hz): How many ripples per second. 1-2 Hz = wide spacing (like slow TIG). 3-5 Hz = tighter ripples. Start at 2 Hz.",
                "AMPLITUDE (%): How big the power swing is. Higher = more pronounced ripple. 20-30% for subtle, 40-50% for bold ripples.",
                "DUTY CYCLE: Ratio of high to low power time. 50% = equal. Higher = more time at high power (hotter average).",
                "For COSMETIC welds: Try 1.5-2.5 Hz frequency, 30-40% amplitude. Adjust to match your travel speed.",
                "Travel speed matters! Slower travel = ripples stack tighter. Faster = ripples spread out. Match frequency to your speed.",
                "Vertical up: SynchroPulse helps control the puddle - the LOW phase lets the puddle freeze slightly.",
                "Too much spatter? Lower the amplitude. Ripples too subtle? Increase amplitude or slow down.",
                "Stainless with SynchroPulse: The pulsing helps control heat input while still getting that pretty bead.",
            ],
        ),
    ]
}
