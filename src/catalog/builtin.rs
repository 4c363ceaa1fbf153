//! The hand-authored medication list.
//!
//! Text is kept exactly as written, including the Portuguese/English mix in
//! some dosing instructions and the title shared by the two saline entries.

use super::{MedicationEntry, RouteType};

/// Built-in entries, in export order.
pub fn entries() -> Vec<MedicationEntry> {
    vec![
        MedicationEntry::new(
            "Lactulose 667mg/mL",
            "Lactulose 667mg/mL - 1 frasco",
            "Tomar 5mL 1x ao dia pela manhã ou à noite, todos os dias.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Nistatina 100.000 UI/mL",
            "Nistatina 100.000 UI/mL - 2 frascos",
            "Aplicar pequena quantidade em toda a boca 3 vezes ao dia após as escovações, por 14 dias. Se a criança for capaz, fazer bochecho por 1 minuto com 6 mL da solução 3 vezes ao dia por 14 dias.",
            RouteType::TopicOtologic,
        ),
        MedicationEntry::new(
            "Albendazol 40mg/mL",
            "Albendazol 40mg/mL - 1 frasco",
            "Tomar 10 mL dose única.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Ivermectina 6mg",
            "Ivermectina 6mg - 2 comprimidos",
            "Tomar 1 comprimido hoje. Após 7 dias, tomar mais 1 comprimido.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Dipirona 500mg",
            "Dipirona 500mg - 1 cartela",
            "Tomar 1 comprimido até de 6/6 horas se tiver dor ou febre maior do que 37,7ºC.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Paracetamol 750mg",
            "Paracetamol 750mg - 1 cartela",
            "Tomar 1 comprimido até de 6/6 horas se tiver dor ou febre maior do que 37,7ºC.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Ibuprofeno 600mg",
            "Ibuprofeno 600mg - 15 comprimidos",
            "Tomar 1 comprimido de 8/8 horas por 5 dias.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Ibuprofeno 300mg",
            "Ibuprofeno 300mg - 15 comprimidos",
            "Tomar 1 comprimido de 8/8 horas por 5 dias.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Amoxicilina 500mg",
            "Amoxicilina 500mg - 21 comprimidos",
            "Tomar 1 comprimido de 8/8 hours for 7 days.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Amoxicilina + clavulanato 500mg + 125mg",
            "Amoxicilina + clavulanato 500mg + 125mg - 21 comprimidos",
            "Tomar 1 comprimido de 8/8 hours for 7 days.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Amoxicilina + clavulanato 875mg + 125mg",
            "Amoxicilina + clavulanato 875mg + 125mg - 14 comprimidos",
            "Tomar 1 comprimido de 12/12 hours for 7 days.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Azitromicina 500mg",
            "Azitromicina 500mg - 5 comprimidos",
            "Tomar 1 comprimido de 24/24h por 5 dias.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Sulfametoxazol + trimetoprima 800mg + 160mg",
            "Sulfametoxazol + trimetoprima 800mg + 160mg - 6 comprimidos",
            "Tomar 1 comprimido de 12/12 horas por 3 dias.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Cefalexina 500mg",
            "Cefalexina 500mg - 28 comprimidos",
            "Tomar 1 comprimido de 6/6 hours for 7 days.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Ciprofloxacino 500mg",
            "Ciprofloxacino 500mg - 14 comprimidos",
            "Tomar 1 comprimido de 12/12 hours for 7 days.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Levofloxacino 500mg",
            "Levofloxacino 500mg - 5 comprimidos",
            "Tomar 1 comprimido de 24/24h por 5 dias.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Ondansetrona 4mg",
            "Ondansetrona 4mg - 1 caixa",
            "Tomar 1 comprimido de 8/8 horas se tiver náuseas ou vômitos.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Omeprazol 20mg",
            "Omeprazol 20mg - 30 comprimidos/mês",
            "Tomar 1 comprimido em jejum todas as manhãs.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Losartana 50mg",
            "Losartana 50mg - 30 comprimidos/mês",
            "Tomar 1 comprimido em jejum todas as manhãs.",
            RouteType::Oral,
        ),
        MedicationEntry::new(
            "Penicilina Benzatina 1.200.000 UI",
            "Penicilina Benzatina 1.200.000 UI - 1 ampola",
            "Diluir em 2 mL de ABD, aspirar 2 mL, diluir com 0,5 mL de Lidocaína e aplicar IM.",
            RouteType::Injectable,
        ),
        MedicationEntry::new(
            "Ceftriaxona 500mg",
            "Ceftriaxona 500mg - 1 ampola",
            "Aplicar IM.",
            RouteType::Injectable,
        ),
        MedicationEntry::new(
            "Mupirocina 2%",
            "Mupirocina 2% - 1 tubo",
            "Aplicar fina camada em toda a lesão 3 vezes ao dia por 10 dias.",
            RouteType::Topic,
        ),
        MedicationEntry::new(
            "Dexametasona 0,1%",
            "Dexametasona 0,1% - 1 tubo",
            "Aplicar nas lesões 2 vezes ao dia por 10 dias ou até a melhora completa.",
            RouteType::Topic,
        ),
        MedicationEntry::new(
            "Cetoconazol 2%",
            "Cetoconazol 2% - 1 tubo",
            "Aplicar fina camada nas lesões 2 vezes ao dia por 7 dias.",
            RouteType::Topic,
        ),
        MedicationEntry::new(
            "Permetrina loção 5%",
            "Permetrina loção 5% - 1 frasco",
            "Aplicar em todo o corpo após o banho à noite hoje e lavar amanhã pela manhã. Repetir o mesmo processo daqui 7 dias.",
            RouteType::Topic,
        ),
        MedicationEntry::new(
            "Tobramicina colírio",
            "Tobramicina colírio - 1 frasco",
            "Aplicar 1 gota em cada olho de 6/6 horas por 7 dias.",
            RouteType::TopicOftamologic,
        ),
        MedicationEntry::new(
            "SF 0,9%",
            "SF 0,9% - 1 frasco",
            "Fazer lavagem ocular antes de aplicar o colírio.",
            RouteType::TopicOftamologic,
        ),
        MedicationEntry::new(
            "Otociriax",
            "Otociriax - 1 frasco",
            "Aplicar 3 gotas de 12/12 horas por 7 dias no ouvido afetado.",
            RouteType::TopicOtologic,
        ),
        MedicationEntry::new(
            "SF 0,9% (nasal)",
            "SF 0,9% - 1 frasco",
            "Fazer lavagem nasal 5 vezes ao dia.",
            RouteType::Nasal,
        ),
        MedicationEntry::new(
            "Budesonida 32mcg",
            "Budesonida 32mcg - 1 frasco",
            "Aplicar 1 jato em cada narina de 12/12h por 3 dias.",
            RouteType::Nasal,
        ),
        MedicationEntry::new(
            "Salbutamol 100mcg",
            "Salbutamol 100mcg - 1 frasco",
            "Inalar 4 jatos de 4/4h com espaçador se apresentar falta de ar, cansaço ou chieira.",
            RouteType::Inhalational,
        ),
        MedicationEntry::new(
            "Espaçador",
            "Espaçador - 1 unidade",
            "",
            RouteType::Inhalational,
        ),
    ]
}
