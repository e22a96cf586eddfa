//! Bilingual message bank.
//!
//! Every reply the bot can send lives here as a Hindi/English pair keyed by
//! [`MessageKey`]. Lookup is a pure function of key and language.

use serde::{Deserialize, Serialize};

use crate::{Language, Stage};

/// Identifies one reply text, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "stage")]
pub enum MessageKey {
    /// Informational block shown on entering a stage.
    Prompt(Stage),
    /// Asks again for a yes/no answer to the stage's question.
    Clarification(Stage),
    /// Biology was not studied; the question stays open.
    BiologyRequired,
    /// Closing message after the last topic.
    Final,
    /// Generic goodbye for early exits and anything after the end.
    End,
    /// Fallback for input the script has no answer for.
    Default,
}

#[derive(Debug, Clone, Copy)]
struct Bilingual {
    hi: &'static str,
    en: &'static str,
}

impl Bilingual {
    const fn pick(self, language: Language) -> &'static str {
        match language {
            Language::Hindi => self.hi,
            Language::English => self.en,
        }
    }
}

const GENERIC_CLARIFICATION: &str = "Please reply with 'Yes' or 'No'.";

const ADMISSION_INTEREST: Bilingual = Bilingual {
    hi: "नमस्ते! 👋\n\nक्या आप Nursing College में admission लेना चाहते हैं?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "Hello! 👋\n\nAre you interested in admission to the Nursing College?\n\n(Please respond with 'Yes' or 'No')",
};

const BIOLOGY_CHECK: Bilingual = Bilingual {
    hi: "बहुत अच्छा! \n\nक्या आपने 12th में Biology पढ़ी है?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "Great!\n\nDid you study Biology in 12th grade?\n\n(Please respond with 'Yes' or 'No')",
};

const BIOLOGY_REQUIRED: Bilingual = Bilingual {
    hi: "B.Sc Nursing में admission के लिए Biology आवश्यक है।",
    en: "Biology is mandatory for admission to B.Sc Nursing.",
};

const PROGRAM_DETAILS: Bilingual = Bilingual {
    hi: "B.Sc Nursing Program के बारे में जानकारी:\n\n🎓 **B.Sc Nursing Program**\n- यह एक full-time program है\n- 4 साल का undergraduate course\n- Practical training के साथ theoretical knowledge\n- Real patients के साथ hands-on experience\n\nक्या आप program के बारे में और जानकारी चाहते हैं?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "About the B.Sc Nursing Program:\n\n🎓 **B.Sc Nursing Program**\n- This is a full-time program\n- 4-year undergraduate course\n- Theoretical knowledge with practical training\n- Hands-on experience with real patients\n\nWould you like more information about the program?\n\n(Please respond with 'Yes' or 'No')",
};

const FEE_STRUCTURE: Bilingual = Bilingual {
    hi: "💰 **Fee Structure:**\n\n**Annual Fees Breakdown:**\n- Tuition Fee: ₹60,000 INR\n- Bus Fee: ₹10,000 INR\n- **Total Annual Fees: ₹70,000 INR**\n\n**Installment Plan:**\n- 1st Installment: ₹30,000 (admission के समय)\n- 2nd Installment: ₹20,000 (first semester के बाद)\n- 3rd Installment: ₹20,000 (second semester के बाद)\n\nक्या आप hostel facilities के बारे में जानना चाहते हैं?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "💰 **Fee Structure:**\n\n**Annual Fees Breakdown:**\n- Tuition Fee: ₹60,000 INR\n- Bus Fee: ₹10,000 INR\n- **Total Annual Fees: ₹70,000 INR**\n\n**Installment Plan:**\n- 1st Installment: ₹30,000 (at the time of admission)\n- 2nd Installment: ₹20,000 (after the first semester)\n- 3rd Installment: ₹20,000 (after the second semester)\n\nWould you like to know about hostel facilities?\n\n(Please respond with 'Yes' or 'No')",
};

const HOSTEL_FACILITIES: Bilingual = Bilingual {
    hi: "🏠 **Hostel Facilities:**\n\n**Accommodation:**\n- 4x7 water and electricity supply\n- CCTV surveillance for security\n- On-site warden available\n\n**Training Facilities:**\n- Hospital training included\n- Real patients के साथ practical training\n- Professional medical environment\n\nक्या आप college location के बारे में जानना चाहते हैं?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "🏠 **Hostel Facilities:**\n\n**Accommodation:**\n- 4x7 water and electricity supply\n- CCTV surveillance for security\n- On-site warden available\n\n**Training Facilities:**\n- Hospital training included\n- Practical training with real patients\n- Professional medical environment\n\nWould you like to know about the college location?\n\n(Please respond with 'Yes' or 'No')",
};

const COLLEGE_LOCATION: Bilingual = Bilingual {
    hi: "📍 **College Location:**\n\nहमारा college Delhi में स्थित है।\n\nक्या आप location या surrounding area के बारे में और जानकारी चाहते हैं?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "📍 **College Location:**\n\nOur college is located in Delhi.\n\nWould you like to know more about the location or surrounding area?\n\n(Please respond with 'Yes' or 'No')",
};

const RECOGNITION: Bilingual = Bilingual {
    hi: "🏛️ **Recognition & Accreditation:**\n\nहमारा college officially recognized है:\n- **Indian Nursing Council (INC)** (Delhi) द्वारा\n\nक्या आप clinical training locations के बारे में जानना चाहते हैं?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "🏛️ **Recognition & Accreditation:**\n\nOur college is officially recognized by:\n- **Indian Nursing Council (INC)** (Delhi)\n\nWould you like to know about clinical training locations?\n\n(Please respond with 'Yes' or 'No')",
};

const CLINICAL_TRAINING: Bilingual = Bilingual {
    hi: "🏥 **Clinical Training Locations:**\n\nहमारे students इन locations पर training करते हैं:\n\n- District Hospital (Backundpur)\n- Community Health Centers\n- Regional Hospital (Chartha)\n- Ranchi Neurosurgery and Allied Science Hospital (Ranchi, Jharkhand)\n\nक्या आप scholarship options के बारे में जानना चाहते हैं?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "🏥 **Clinical Training Locations:**\n\nOur students receive training at the following locations:\n\n- District Hospital (Backundpur)\n- Community Health Centers\n- Regional Hospital (Chartha)\n- Ranchi Neurosurgery and Allied Science Hospital (Ranchi, Jharkhand)\n\nWould you like to know about scholarship options?\n\n(Please respond with 'Yes' or 'No')",
};

const SCHOLARSHIP: Bilingual = Bilingual {
    hi: "🎓 **Scholarship Options:**\n\nAvailable scholarships:\n- **Government Post-Matric Scholarship:** ₹18k-₹23k\n- **Labour Ministry Scholarships:** ₹40k-₹48k (Labour Registration वालों के लिए)\n\nक्या आप total seats के बारे में जानना चाहते हैं?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "🎓 **Scholarship Options:**\n\nAvailable scholarships:\n- **Government Post-Matric Scholarship:** ₹18k-₹23k\n- **Labour Ministry Scholarships:** ₹40k-₹48k (for those with Labour Registration)\n\nWould you like to know about total seats available?\n\n(Please respond with 'Yes' or 'No')",
};

const TOTAL_SEATS: Bilingual = Bilingual {
    hi: "👥 **Total Seats Available:**\n\nNursing program में कुल **60 seats** available हैं।\n\nक्या आप eligibility criteria के बारे में जानना चाहते हैं?\n\n('Haan' या 'Nahi' में उत्तर दें)",
    en: "👥 **Total Seats Available:**\n\nThere are a total of **60 seats** available in the Nursing program.\n\nWould you like to know about the eligibility criteria?\n\n(Please respond with 'Yes' or 'No')",
};

const ELIGIBILITY: Bilingual = Bilingual {
    hi: "✅ **Eligibility Criteria for Admission:**\n\n**Required Qualifications:**\n- Biology in 12th grade (mandatory)\n- PNT Exam (must be passed)\n- Age: 17 to 35 years\n\n**Additional Requirements:**\n- Good health and fitness\n- English language proficiency\n- Commitment to nursing profession\n\nधन्यवाद! 🙏",
    en: "✅ **Eligibility Criteria for Admission:**\n\n**Required Qualifications:**\n- Biology in 12th grade (mandatory)\n- PNT Exam (must be passed)\n- Age: 17 to 35 years\n\n**Additional Requirements:**\n- Good health and fitness\n- English language proficiency\n- Commitment to the nursing profession\n\nThank you! 🙏",
};

const FINAL: Bilingual = Bilingual {
    hi: "🎉 **Thank you for your interest!**\n\nआपको हमारे B.Sc Nursing program के बारे में सभी जानकारी मिल गई है।\n\n**Next Steps:**\n- Application form भरें\n- Required documents तैयार करें\n- PNT Exam की तैयारी करें\n\nकोई और सवाल हो तो हमसे संपर्क करें!\n\nधन्यवाद! 🙏",
    en: "🎉 **Thank you for your interest!**\n\nYou have received all the information about our B.Sc Nursing program.\n\n**Next Steps:**\n- Fill out the application form\n- Prepare the required documents\n- Prepare for the PNT Exam\n\nIf you have any more questions, feel free to contact us!\n\nThank you! 🙏",
};

const END: Bilingual = Bilingual {
    hi: "धन्यवाद! 🙏\n\nआपका समय देने के लिए धन्यवाद। भविष्य में कोई सहायता चाहिए तो हमसे संपर्क करें।\n\nTake care! 👋",
    en: "Thank you! 🙏\n\nThank you for your time. If you need any assistance in the future, feel free to contact us.\n\nTake care! 👋",
};

const DEFAULT: Bilingual = Bilingual {
    hi: "माफ़ कीजिए, मैं समझ नहीं पाया। कृपया फिर से प्रयास करें।",
    en: "I'm sorry, I didn't understand. Please try again.",
};

/// Question re-asked when a reply is unclear. `None` for stages that do not
/// ask anything.
const fn clarification(stage: Stage) -> Option<Bilingual> {
    let pair = match stage {
        Stage::AdmissionInterest => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आप Nursing College में admission लेना चाहते हैं?",
            en: "Please reply with 'Yes' or 'No'. Are you interested in admission to the Nursing College?",
        },
        Stage::BiologyCheck => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आपने 12th में Biology पढ़ी है?",
            en: "Please reply with 'Yes' or 'No'. Did you study Biology in 12th grade?",
        },
        Stage::ProgramDetails => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आप program के बारे में और जानकारी चाहते हैं?",
            en: "Please reply with 'Yes' or 'No'. Would you like more information about the program?",
        },
        Stage::FeeStructure => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आप hostel facilities के बारे में जानना चाहते हैं?",
            en: "Please reply with 'Yes' or 'No'. Would you like to know about hostel facilities?",
        },
        Stage::HostelFacilities => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आप college location के बारे में जानना चाहते हैं?",
            en: "Please reply with 'Yes' or 'No'. Would you like to know about the college location?",
        },
        Stage::CollegeLocation => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आप college की recognition के बारे में जानना चाहते हैं?",
            en: "Please reply with 'Yes' or 'No'. Would you like to know about the college's recognition?",
        },
        Stage::Recognition => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आप clinical training locations के बारे में जानना चाहते हैं?",
            en: "Please reply with 'Yes' or 'No'. Would you like to know about clinical training locations?",
        },
        Stage::ClinicalTraining => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आप scholarship options के बारे में जानना चाहते हैं?",
            en: "Please reply with 'Yes' or 'No'. Would you like to know about scholarship options?",
        },
        Stage::Scholarship => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आप total seats के बारे में जानना चाहते हैं?",
            en: "Please reply with 'Yes' or 'No'. Would you like to know about total seats available?",
        },
        Stage::TotalSeats => Bilingual {
            hi: "Kripya 'Haan' ya 'Nahi' mein jawab dein. क्या आप eligibility criteria के बारे में जानना चाहते हैं?",
            en: "Please reply with 'Yes' or 'No'. Would you like to know about the eligibility criteria?",
        },
        Stage::Initial | Stage::Eligibility | Stage::End => return None,
    };
    Some(pair)
}

const fn prompt(stage: Stage) -> Bilingual {
    match stage {
        Stage::AdmissionInterest => ADMISSION_INTEREST,
        Stage::BiologyCheck => BIOLOGY_CHECK,
        Stage::ProgramDetails => PROGRAM_DETAILS,
        Stage::FeeStructure => FEE_STRUCTURE,
        Stage::HostelFacilities => HOSTEL_FACILITIES,
        Stage::CollegeLocation => COLLEGE_LOCATION,
        Stage::Recognition => RECOGNITION,
        Stage::ClinicalTraining => CLINICAL_TRAINING,
        Stage::Scholarship => SCHOLARSHIP,
        Stage::TotalSeats => TOTAL_SEATS,
        Stage::Eligibility => ELIGIBILITY,
        Stage::End => END,
        Stage::Initial => DEFAULT,
    }
}

/// Look up the text for `key` in `language`.
#[must_use]
pub const fn message(key: MessageKey, language: Language) -> &'static str {
    match key {
        MessageKey::Prompt(stage) => prompt(stage).pick(language),
        MessageKey::Clarification(stage) => match clarification(stage) {
            Some(pair) => pair.pick(language),
            None => GENERIC_CLARIFICATION,
        },
        MessageKey::BiologyRequired => BIOLOGY_REQUIRED.pick(language),
        MessageKey::Final => FINAL.pick(language),
        MessageKey::End => END.pick(language),
        MessageKey::Default => DEFAULT.pick(language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_question_has_its_own_clarification() {
        for stage in Stage::ALL.into_iter().filter(|s| s.is_question()) {
            for language in Language::ALL {
                let text = message(MessageKey::Clarification(stage), language);
                assert_ne!(text, GENERIC_CLARIFICATION, "{stage} / {language}");
            }
        }
    }

    #[test]
    fn test_clarification_fallback() {
        assert_eq!(
            message(MessageKey::Clarification(Stage::End), Language::Hindi),
            GENERIC_CLARIFICATION
        );
    }

    #[test]
    fn test_languages_differ() {
        let keys = [
            MessageKey::Prompt(Stage::AdmissionInterest),
            MessageKey::BiologyRequired,
            MessageKey::Final,
            MessageKey::End,
            MessageKey::Default,
        ];
        for key in keys {
            assert_ne!(
                message(key, Language::Hindi),
                message(key, Language::English)
            );
        }
    }

    #[test]
    fn test_fee_figures() {
        for language in Language::ALL {
            let fees = message(MessageKey::Prompt(Stage::FeeStructure), language);
            for figure in ["₹60,000", "₹10,000", "₹70,000", "₹30,000", "₹20,000"] {
                assert!(fees.contains(figure), "{figure} missing in {language}");
            }
        }
    }

    #[test]
    fn test_seats_and_age() {
        for language in Language::ALL {
            assert!(message(MessageKey::Prompt(Stage::TotalSeats), language).contains("60 seats"));
            assert!(
                message(MessageKey::Prompt(Stage::Eligibility), language)
                    .contains("Age: 17 to 35 years")
            );
        }
    }

    #[test]
    fn test_final_differs_from_end() {
        for language in Language::ALL {
            assert_ne!(
                message(MessageKey::Final, language),
                message(MessageKey::End, language)
            );
        }
    }
}
