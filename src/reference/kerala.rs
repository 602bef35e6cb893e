//! Hand-maintained district → LSG table for Kerala.
//!
//! Coverage is partial: corporations, municipalities and block panchayats are
//! listed, but the 941 grama panchayats are mostly absent. Names missing here
//! resolve to the `Unknown` district unless the source data carries a hint.

use super::DistrictLsgs;

pub(crate) static KERALA_DISTRICTS: &[DistrictLsgs] = &[
    DistrictLsgs {
        district: "Thiruvananthapuram",
        corporations: &["Thiruvananthapuram Corporation"],
        municipalities: &[
            "Attingal Municipality",
            "Neyyattinkara Municipality",
            "Varkala Municipality",
            "Nedumangad Municipality",
        ],
        block_panchayats: &[
            "Thiruvananthapuram Block Panchayat",
            "Neyyattinkara Block Panchayat",
            "Chirayinkeezhu Block Panchayat",
            "Nedumangad Block Panchayat",
            "Vamanapuram Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Kollam",
        corporations: &["Kollam Corporation"],
        municipalities: &[
            "Karunagappally Municipality",
            "Kottarakkara Municipality",
            "Paravur Municipality",
            "Punalur Municipality",
        ],
        block_panchayats: &[
            "Kollam Block Panchayat",
            "Karunagappally Block Panchayat",
            "Kottarakkara Block Panchayat",
            "Pathanapuram Block Panchayat",
            "Punalur Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Pathanamthitta",
        corporations: &[],
        municipalities: &[
            "Pathanamthitta Municipality",
            "Adoor Municipality",
            "Pandalam Municipality",
            "Thiruvalla Municipality",
        ],
        block_panchayats: &[
            "Pathanamthitta Block Panchayat",
            "Adoor Block Panchayat",
            "Kozhencherry Block Panchayat",
            "Konni Block Panchayat",
            "Mallappally Block Panchayat",
            "Pandalam Block Panchayat",
            "Ranni Block Panchayat",
            "Thiruvalla Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Alappuzha",
        corporations: &[],
        municipalities: &[
            "Alappuzha Municipality",
            "Cherthala Municipality",
            "Kayamkulam Municipality",
            "Mavelikkara Municipality",
        ],
        block_panchayats: &[
            "Alappuzha Block Panchayat",
            "Ambalapuzha Block Panchayat",
            "Chengannur Block Panchayat",
            "Cherthala Block Panchayat",
            "Karthikappally Block Panchayat",
            "Kuttanad Block Panchayat",
            "Mavelikkara Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Kottayam",
        corporations: &[],
        municipalities: &[
            "Kottayam Municipality",
            "Changanassery Municipality",
            "Ettumanoor Municipality",
            "Pala Municipality",
            "Vaikom Municipality",
        ],
        block_panchayats: &[
            "Kottayam Block Panchayat",
            "Changanassery Block Panchayat",
            "Kanjirappally Block Panchayat",
            "Lakshadweep Block Panchayat",
            "Meenachil Block Panchayat",
            "Udayanapuram Block Panchayat",
            "Vaikom Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Idukki",
        corporations: &[],
        municipalities: &[
            "Thodupuzha Municipality",
            "Kattappana Municipality",
        ],
        block_panchayats: &[
            "Idukki Block Panchayat",
            "Thodupuzha Block Panchayat",
            "Udumbanchola Block Panchayat",
            "Devikulam Block Panchayat",
            "Peerumedu Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Ernakulam",
        corporations: &["Kochi Corporation"],
        municipalities: &[
            "Aluva Municipality",
            "Angamaly Municipality",
            "Kalamassery Municipality",
            "Kothamangalam Municipality",
            "Muvattupuzha Municipality",
            "North Paravur Municipality",
            "Perumbavoor Municipality",
            "Thrikkakara Municipality",
            "Eloor Municipality",
        ],
        block_panchayats: &[
            "Ernakulam Block Panchayat",
            "Aluva Block Panchayat",
            "Kothamangalam Block Panchayat",
            "Kunnathunad Block Panchayat",
            "Muvattupuzha Block Panchayat",
            "Paravur Block Panchayat",
            "Perumbavoor Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Thrissur",
        corporations: &["Thrissur Corporation"],
        municipalities: &[
            "Chalakudy Municipality",
            "Guruvayur Municipality",
            "Irinjalakuda Municipality",
            "Kodungallur Municipality",
            "Wadakkanchery Municipality",
        ],
        block_panchayats: &[
            "Thrissur Block Panchayat",
            "Anthikkad Block Panchayat",
            "Chavakkad Block Panchayat",
            "Kodungallur Block Panchayat",
            "Mukundapuram Block Panchayat",
            "Thalappilly Block Panchayat",
            "Chalakudy Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Palakkad",
        corporations: &[],
        municipalities: &[
            "Palakkad Municipality",
            "Chittur-Thathamangalam Municipality",
            "Mannarkkad Municipality",
            "Ottappalam Municipality",
            "Pattambi Municipality",
            "Shoranur Municipality",
        ],
        block_panchayats: &[
            "Palakkad Block Panchayat",
            "Alathur Block Panchayat",
            "Chittur Block Panchayat",
            "Kollengode Block Panchayat",
            "Mannarkkad Block Panchayat",
            "Ottappalam Block Panchayat",
            "Pattambi Block Panchayat",
            "Parli Block Panchayat",
        ],
        gram_panchayats: &["Agali Gramapanchayath", "Agali"],
    },
    DistrictLsgs {
        district: "Malappuram",
        corporations: &[],
        municipalities: &[
            "Malappuram Municipality",
            "Manjeri Municipality",
            "Nilambur Municipality",
            "Ponnani Municipality",
            "Tirur Municipality",
            "Tanur Municipality",
            "Kottakkal Municipality",
            "Perinthalmanna Municipality",
            "Valanchery Municipality",
        ],
        block_panchayats: &[
            "Malappuram Block Panchayat",
            "Eranad Block Panchayat",
            "Kondotty Block Panchayat",
            "Nilambur Block Panchayat",
            "Perinthalmanna Block Panchayat",
            "Ponnani Block Panchayat",
            "Tirur Block Panchayat",
            "Tirurangadi Block Panchayat",
            "Vengara Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Kozhikode",
        corporations: &["Kozhikode Corporation"],
        municipalities: &[
            "Feroke Municipality",
            "Koyilandy Municipality",
            "Vadakara Municipality",
            "Quilandy Municipality",
            "Ramanattukara Municipality",
        ],
        block_panchayats: &[
            "Kozhikode Block Panchayat",
            "Balussery Block Panchayat",
            "Chelannur Block Panchayat",
            "Koduvally Block Panchayat",
            "Kunnamangalam Block Panchayat",
            "Melady Block Panchayat",
            "Perambra Block Panchayat",
            "Thamarassery Block Panchayat",
            "Vadakara Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Wayanad",
        corporations: &[],
        municipalities: &[
            "Kalpetta Municipality",
            "Mananthavady Municipality",
            "Sulthan Bathery Municipality",
        ],
        block_panchayats: &[
            "Wayanad Block Panchayat",
            "Mananthavady Block Panchayat",
            "Sulthan Bathery Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Kannur",
        corporations: &["Kannur Corporation"],
        municipalities: &[
            "Thalassery Municipality",
            "Mattannur Municipality",
            "Payyannur Municipality",
            "Iritty Municipality",
            "Taliparamba Municipality",
        ],
        block_panchayats: &[
            "Kannur Block Panchayat",
            "Iritty Block Panchayat",
            "Payyannur Block Panchayat",
            "Taliparamba Block Panchayat",
            "Thalassery Block Panchayat",
            "Peravoor Block Panchayat",
        ],
        gram_panchayats: &[],
    },
    DistrictLsgs {
        district: "Kasaragod",
        corporations: &[],
        municipalities: &[
            "Kasaragod Municipality",
            "Kanhangad Municipality",
            "Nileshwar Municipality",
        ],
        block_panchayats: &[
            "Kasaragod Block Panchayat",
            "Kanhangad Block Panchayat",
            "Manjeshwar Block Panchayat",
            "Nileshwar Block Panchayat",
        ],
        gram_panchayats: &[],
    },
];
