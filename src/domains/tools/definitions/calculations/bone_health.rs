//! Pediatric bone health: corrected calcium, vitamin D status and DXA Z-score.

use serde::Deserialize;

use crate::domains::formulas::labs::corrected_calcium;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct BoneHealthParams {
    pub calcium_total_mg_dl: f64,
    pub albumin_g_dl: f64,
    pub age_years: f64,
    pub bmd_zscore: Option<f64>,
    pub vitamin_d_ng_ml: Option<f64>,
}

pub static CALCIUM_BANDS: &[Band] = &[
    Band::below(8.5, "IPOCALCEMIA", "Valori bassi, valutare sintomi e cause"),
    Band::at_most(10.5, "NORMOCALCEMIA", "Valori nella norma"),
    Band::otherwise("IPERCALCEMIA", "Valori elevati, valutare cause"),
];

pub static VITAMIN_D_BANDS: &[Band] = &[
    Band::below(
        12.0,
        "CARENZA SEVERA",
        "Terapia con colecalciferolo 2000-4000 UI/die per 6-8 settimane, poi mantenimento",
    ),
    Band::below(
        20.0,
        "CARENZA",
        "Terapia con colecalciferolo 1000-2000 UI/die per 6-8 settimane",
    ),
    Band::below(30.0, "INSUFFICIENZA", "Supplementazione 600-1000 UI/die"),
    Band::otherwise(
        "SUFFICIENZA",
        "Adeguato apporto dietetico, esposizione solare",
    ),
];

/// Pediatric DXA is read as a Z-score, never a T-score.
pub static BMD_BANDS: &[Band] = &[
    Band::below(
        -2.0,
        "DENSITÀ MINERALE OSSEA MOLTO BASSA",
        "Valutazione endocrinologica, considerare intervento farmacologico, ricerca cause secondarie",
    ),
    Band::below(
        -1.0,
        "BASSA DENSITÀ MINERALE OSSEA",
        "Ottimizzare apporto di calcio, vitamina D, attività fisica. Rivalutare in 12 mesi",
    ),
    Band::otherwise(
        "NORMALE",
        "Nessuna azione specifica. Mantenere adeguato apporto di calcio e vitamina D",
    ),
];

/// Recommended daily calcium intake (mg).
fn calcium_need_mg(age_years: f64) -> u32 {
    if age_years < 1.0 {
        200
    } else if age_years < 4.0 {
        700
    } else if age_years < 9.0 {
        1000
    } else {
        1300
    }
}

/// Recommended daily vitamin D intake (IU).
fn vitamin_d_need_iu(age_years: f64) -> u32 {
    if age_years < 1.0 { 400 } else { 600 }
}

pub struct BoneHealthTool;

impl BoneHealthTool {
    pub const NAME: &'static str = "calculate_pediatric_bone_health";

    pub const DESCRIPTION: &'static str =
        "Calcola parametri di salute ossea pediatrica (calcio corretto, interpretazione DXA)";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("calcium_total_mg_dl", "Calcio sierico totale in mg/dL").range(5.0, 15.0),
        ParamSpec::number("albumin_g_dl", "Albumina sierica in g/dL").range(1.0, 6.0),
        ParamSpec::number("bmd_zscore", "Z-score della densità minerale ossea (DXA)")
            .range(-5.0, 5.0)
            .optional(),
        ParamSpec::number("age_years", "Età in anni").range(0.0, 18.0),
        ParamSpec::number("vitamin_d_ng_ml", "Livello di vitamina D (25-OH) in ng/mL")
            .range(1.0, 100.0)
            .optional(),
    ];

    pub fn execute(params: &BoneHealthParams) -> Result<CalculationResult, ToolError> {
        let calcium = corrected_calcium(params.calcium_total_mg_dl, params.albumin_g_dl);
        let calcium_band = classify(calcium, CALCIUM_BANDS)?;

        let mut result = CalculationResult::new(
            "Valutazione Salute Ossea Pediatrica",
            Measure::quantity("Calcio corretto", calcium, 2, "mg/dL"),
            Classification::from_band("Stato calcio", calcium_band),
        );

        if let Some(vitamin_d) = params.vitamin_d_ng_ml {
            let band = classify(vitamin_d, VITAMIN_D_BANDS)?;
            result = result
                .secondary(Classification::from_band("Vitamina D", band))
                .detail("Vitamina D (25-OH)", format!("{vitamin_d} ng/mL"));
        }
        if let Some(z) = params.bmd_zscore {
            let band = classify(z, BMD_BANDS)?;
            result = result
                .secondary(Classification::from_band("Densità minerale ossea", band))
                .detail("BMD Z-score", z);
        }

        Ok(result
            .detail("Età", format!("{} anni", params.age_years))
            .detail("Calcio totale", format!("{} mg/dL", params.calcium_total_mg_dl))
            .detail("Albumina", format!("{} g/dL", params.albumin_g_dl))
            .detail(
                "Fabbisogno giornaliero di calcio",
                format!("{} mg/die", calcium_need_mg(params.age_years)),
            )
            .detail(
                "Fabbisogno giornaliero di vitamina D",
                format!("{} UI/die", vitamin_d_need_iu(params.age_years)),
            )
            .note("Calcio corretto = calcio totale + 0.8 × (4 - albumina), se albumina <4 g/dL")
            .note("Riferimento calcio corretto: 8.5-10.5 mg/dL")
            .note("Dieta ricca di calcio, attività fisica con carico, adeguata esposizione solare"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([CALCIUM_BANDS, VITAMIN_D_BANDS, BMD_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(calcium: f64, albumin: f64) -> BoneHealthParams {
        BoneHealthParams {
            calcium_total_mg_dl: calcium,
            albumin_g_dl: albumin,
            age_years: 10.0,
            bmd_zscore: None,
            vitamin_d_ng_ml: None,
        }
    }

    #[test]
    fn test_low_albumin_corrects_calcium() {
        let result = BoneHealthTool::execute(&params(7.8, 3.0)).unwrap();
        assert_eq!(result.primary.value, 8.6);
        assert_eq!(result.classification.label, "NORMOCALCEMIA");
        assert!(result.secondary.is_empty());
        assert!(result.render().contains("1300 mg/die"));
    }

    #[test]
    fn test_optional_markers_add_classifications() {
        let p = BoneHealthParams {
            vitamin_d_ng_ml: Some(15.0),
            bmd_zscore: Some(-2.0),
            ..params(11.0, 4.5)
        };
        let result = BoneHealthTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, "IPERCALCEMIA");
        assert_eq!(result.secondary[0].label, "CARENZA");
        assert_eq!(result.secondary[1].label, "BASSA DENSITÀ MINERALE OSSEA");
    }

    #[test]
    fn test_needs_by_age() {
        assert_eq!(calcium_need_mg(0.5), 200);
        assert_eq!(calcium_need_mg(3.9), 700);
        assert_eq!(calcium_need_mg(18.0), 1300);
        assert_eq!(vitamin_d_need_iu(0.5), 400);
        assert_eq!(vitamin_d_need_iu(1.0), 600);
    }
}
