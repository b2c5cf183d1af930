use super::super::domain::{Archetype, CorrelationKey, DiagnosticState, Locale, Pillar};
use super::{
    ArchetypeContent, CorrelationContent, LocaleContent, PillarContent, QuestionContent,
    StateContent, UiCopy,
};

pub(super) static CONTENT: LocaleContent = LocaleContent {
    locale: Locale::Es,
    states: [
        StateContent {
            state: DiagnosticState::Confusion,
            label: "Confusión",
            one_liner: "Te estás moviendo, pero sin mapa.",
            meaning: "Tus respuestas muestran prioridades en disputa y ninguna brújula interna \
                clara. La energía se va en decidir qué importa en lugar de actuar.",
            characteristics: &[
                "Dificultad para elegir entre opciones de peso parecido",
                "Empezar muchas cosas y terminar pocas",
                "La sensación de que el tiempo pasa sin dirección",
            ],
            primary_risk: "Pasar años en las prioridades de otros porque las tuyas nunca tuvieron nombre.",
            recommended_focus: &[
                "Nombrar las tres cosas que más importan en esta etapa",
                "Cerrar un pendiente abierto cada día",
            ],
            next_step: "Escribe una página que describa cómo sería un buen año para ti.",
            immediate_win: "Termina o elimina cinco tareas abiertas que ya no te sirven.",
            no_to_say: "Di no a nuevos compromisos hasta tener por escrito tus tres prioridades.",
            mindset_shift: "De \"¿qué debería hacer?\" a \"¿qué me niego a descuidar?\"",
            stoic_lesson: "La dirección nace de saber qué depende de ti y comprometerte con ello.",
            stoic_quote: "Ningún viento es favorable para quien no sabe a qué puerto se dirige.",
            stoic_author: "Séneca",
        },
        StateContent {
            state: DiagnosticState::Overload,
            label: "Sobrecarga",
            one_liner: "Estás cargando más de lo que una persona debería.",
            meaning: "La demanda supera tu capacidad. El problema no es la disciplina sino el \
                volumen: demasiados compromisos y muy poca recuperación.",
            characteristics: &[
                "Cansancio crónico al final del día",
                "Aceptar pedidos que luego generan resentimiento",
                "Un descanso que se siente como deuda y no como derecho",
            ],
            primary_risk: "Un agotamiento que impone el descanso que te niegas a tomar por voluntad propia.",
            recommended_focus: &[
                "Recortar compromisos antes de sumar rutinas",
                "Proteger un bloque de recuperación cada día",
            ],
            next_step: "Enumera todos tus compromisos activos y marca los dos que renegociarás esta semana.",
            immediate_win: "Cancela o delega una reunión o tarea programada para mañana.",
            no_to_say: "Di no al próximo pedido que llegue cuando ya estés al límite.",
            mindset_shift: "De \"¿cómo encajo todo?\" a \"¿qué merece mi energía limitada?\"",
            stoic_lesson: "Hacer menos, y solo lo esencial, es el camino a la tranquilidad.",
            stoic_quote: "Si buscas la tranquilidad, haz menos.",
            stoic_author: "Marco Aurelio",
        },
        StateContent {
            state: DiagnosticState::Reactivity,
            label: "Reactividad",
            one_liner: "Los acontecimientos te conducen antes de que tú te conduzcas.",
            meaning: "El espacio entre estímulo y respuesta es corto. La frustración y la urgencia \
                guían decisiones que luego revisas.",
            characteristics: &[
                "Irritación rápida cuando los planes cambian",
                "Respuestas enviadas en caliente",
                "Arrepentimiento después de conversaciones difíciles",
            ],
            primary_risk: "Dañar relaciones y decisiones con respuestas que no elegirías con calma.",
            recommended_focus: &[
                "Crear una pausa antes de cada respuesta importante",
                "Notar la primera señal física de agitación",
            ],
            next_step: "Adopta la regla de los diez minutos antes de responder a cualquier cosa que te altere.",
            immediate_win: "Respira despacio tres veces antes de la próxima respuesta que escribas hoy.",
            no_to_say: "Di no a responder provocaciones el mismo día en que las recibes.",
            mindset_shift: "De \"me hicieron reaccionar\" a \"yo elijo mi respuesta\".",
            stoic_lesson: "No nos perturban los hechos, sino nuestros juicios sobre ellos.",
            stoic_quote: "No son las cosas las que inquietan a los hombres, sino las opiniones sobre las cosas.",
            stoic_author: "Epicteto",
        },
        StateContent {
            state: DiagnosticState::Uncertainty,
            label: "Incertidumbre",
            one_liner: "El futuro ocupa el espacio donde debería estar la acción.",
            meaning: "La preocupación por lo que podría pasar, a menudo dinero o estabilidad, pesa \
                más que los pasos que puedes dar ahora.",
            characteristics: &[
                "Ensayar escenarios negativos en la cabeza",
                "Posponer decisiones hasta sentirte seguro",
                "Inseguridad financiera que tiñe las decisiones diarias",
            ],
            primary_risk: "Una parálisis que convierte riesgos imaginados en estancamiento real.",
            recommended_focus: &[
                "Separar lo que controlas de lo que no",
                "Convertir cada preocupación en una acción concreta",
            ],
            next_step: "Anota tus tres mayores preocupaciones y una acción bajo tu control para cada una.",
            immediate_win: "Revisa un número que has estado evitando, como un saldo o una factura.",
            no_to_say: "Di no a decisiones tomadas solo para calmar la ansiedad.",
            mindset_shift: "De \"¿y si sale mal?\" a \"¿qué puedo hacer hoy?\"",
            stoic_lesson: "Casi todo el sufrimiento vive en la anticipación; el presente suele ser llevadero.",
            stoic_quote: "Sufrimos más a menudo en la imaginación que en la realidad.",
            stoic_author: "Séneca",
        },
        StateContent {
            state: DiagnosticState::Disconnection,
            label: "Desconexión",
            one_liner: "Estás presente con el cuerpo, pero lejos de las personas que te rodean.",
            meaning: "Tus respuestas señalan vínculos débiles y pocos espacios donde puedas ser \
                plenamente tú.",
            characteristics: &[
                "Conversaciones que se quedan en la superficie",
                "Sentirte solo incluso acompañado",
                "Posponer el contacto con personas importantes",
            ],
            primary_risk: "Un aislamiento que desgasta en silencio la salud, el sentido y la resiliencia.",
            recommended_focus: &[
                "Invertir de forma deliberada en una relación cada semana",
                "Ser totalmente honesto en al menos una conversación al día",
            ],
            next_step: "Agenda una llamada o un encuentro con alguien a quien extrañas en los próximos siete días.",
            immediate_win: "Envía hoy un mensaje sincero de agradecimiento a una persona.",
            no_to_say: "Di no a las pantallas durante una comida compartida esta semana.",
            mindset_shift: "De \"nadie me busca\" a \"yo doy el primer paso\".",
            stoic_lesson: "Estamos hechos para cooperar; el aislamiento va contra nuestra naturaleza.",
            stoic_quote: "Hemos nacido para colaborar, como los pies, las manos, los párpados.",
            stoic_author: "Marco Aurelio",
        },
        StateContent {
            state: DiagnosticState::Stagnation,
            label: "Estancamiento",
            one_liner: "La rutina sigue, pero ya no avanzas.",
            meaning: "Los días se repiten sin crecimiento. Sabes lo que necesita cambiar, pero \
                sigues posponiéndolo.",
            characteristics: &[
                "La sensación de vivir en piloto automático",
                "Cambios importantes siempre dejados para después",
                "Poco entusiasmo por el futuro",
            ],
            primary_risk: "Despertar dentro de unos años en el mismo lugar, con menos energía para cambiar.",
            recommended_focus: &[
                "Elegir un cambio y empezarlo en su forma más pequeña",
                "Medir el progreso cada semana en lugar de buscar la perfección",
            ],
            next_step: "Elige el cambio que más pospones y define un primer paso de quince minutos.",
            immediate_win: "Da ese paso de quince minutos hoy, antes que cualquier otra cosa.",
            no_to_say: "Di no a esperar el momento perfecto para empezar.",
            mindset_shift: "De \"algún día\" a \"hoy, en pequeño\".",
            stoic_lesson: "La vida es bastante larga si se usa bien; postergar es su mayor desperdicio.",
            stoic_quote: "Mientras aplazamos, la vida pasa.",
            stoic_author: "Séneca",
        },
        StateContent {
            state: DiagnosticState::Clarity,
            label: "Claridad",
            one_liner: "Ves el camino; ahora necesita constancia.",
            meaning: "Tu dirección es clara y tus decisiones nacen de la calma. El trabajo ahora \
                es convertir la claridad en acción constante en todos los pilares.",
            characteristics: &[
                "Decisiones tomadas sin larga vacilación",
                "Un sentido de propósito definido",
                "Calma ante la presión cotidiana",
            ],
            primary_risk: "Confundir saber qué hacer con hacerlo, y dejar a la deriva los pilares más débiles.",
            recommended_focus: &[
                "Convertir la claridad en compromisos semanales",
                "Elevar tu pilar más débil al nivel de los demás",
            ],
            next_step: "Define un compromiso medible para tu pilar más débil este mes.",
            immediate_win: "Reserva treinta minutos en la agenda de mañana para ese pilar.",
            no_to_say: "Di no a oportunidades que no encajan con tu dirección, por atractivas que sean.",
            mindset_shift: "De \"sé adónde voy\" a \"camino hacia allí cada día\".",
            stoic_lesson: "La claridad es un punto de partida; el carácter se forja con acción repetida.",
            stoic_quote: "Primero di a ti mismo qué quieres ser; y luego haz lo que tengas que hacer.",
            stoic_author: "Epicteto",
        },
        StateContent {
            state: DiagnosticState::Alignment,
            label: "Alineación",
            one_liner: "Lo que valoras y lo que haces avanzan juntos.",
            meaning: "Tus acciones coinciden con tus valores. Es una posición sólida, y la tarea es \
                protegerla y compartirla.",
            characteristics: &[
                "Poca distancia entre intención y conducta",
                "Energía que proviene de actividades con sentido",
                "Un sentido de identidad estable",
            ],
            primary_risk: "La complacencia: creer que la alineación es permanente y descuidar los hábitos que la construyeron.",
            recommended_focus: &[
                "Proteger las rutinas que te sostienen",
                "Apoyar a alguien que recorre un camino parecido",
            ],
            next_step: "Anota los tres hábitos más responsables de tu equilibrio actual.",
            immediate_win: "Registra una decisión de esta semana que te mantuvo alineado y por qué importó.",
            no_to_say: "Di no a compromisos que cambiarían tus valores por aprobación.",
            mindset_shift: "De \"ya llegué\" a \"sigo eligiendo esto\".",
            stoic_lesson: "La virtud es una práctica, no un trofeo; se conserva ejercitándola.",
            stoic_quote: "No pierdas más tiempo discutiendo cómo debe ser un hombre bueno. Sé uno.",
            stoic_author: "Marco Aurelio",
        },
    ],
    pillars: [
        PillarContent {
            pillar: Pillar::Health,
            label: "Salud",
            tier_insights: [
                "Tu cuerpo señala agotamiento; el sueño, el movimiento y la alimentación van antes que todo.",
                "Tu salud se sostiene, pero con poca reserva; los pequeños descuidos se notarán pronto.",
                "Tu base de salud es sólida; la constancia la mantendrá así.",
                "Tu cuerpo es un recurso real; usa esa energía con intención.",
            ],
            leverage: "Empieza por el sueño: una hora fija para acostarte eleva todos los demás pilares.",
        },
        PillarContent {
            pillar: Pillar::Work,
            label: "Trabajo",
            tier_insights: [
                "El trabajo drena más de lo que devuelve y ocupa el espacio del resto de tu vida.",
                "El trabajo solo es sostenible en las semanas buenas; faltan sentido o límites.",
                "El trabajo tiene sentido y está mayormente bajo control.",
                "El trabajo te da energía y refleja quién eres.",
            ],
            leverage: "Fija una hora de cierre de tu jornada y respétala cinco días seguidos.",
        },
        PillarContent {
            pillar: Pillar::Relationships,
            label: "Relaciones",
            tier_insights: [
                "Tus vínculos son frágiles; te faltan lugares donde ser tú mismo.",
                "Hay conexión, pero es irregular o se queda en la superficie.",
                "Tienes relaciones confiables que te apoyan.",
                "Tus relaciones son profundas y una fuente de fuerza.",
            ],
            leverage: "Agenda cada semana una conversación sin prisa con alguien importante.",
        },
        PillarContent {
            pillar: Pillar::Finance,
            label: "Finanzas",
            tier_insights: [
                "El dinero es una fuente constante de preocupación y guía muchas decisiones.",
                "Tus finanzas funcionan, pero un imprevisto podría desequilibrarlas.",
                "Sientes que controlas tu dinero la mayor parte del tiempo.",
                "Tus finanzas te dan libertad y opciones.",
            ],
            leverage: "Revisa todos los gastos recurrentes y cancela el que no volverías a elegir.",
        },
        PillarContent {
            pillar: Pillar::Spirituality,
            label: "Espiritualidad",
            tier_insights: [
                "Casi no hay espacio para la reflexión, el sentido o la contemplación.",
                "Hay momentos de reflexión, pero son escasos y se desplazan con facilidad.",
                "Tienes una práctica regular que te centra.",
                "La reflexión y el sentido forman parte de tus días.",
            ],
            leverage: "Empieza una revisión nocturna de cinco minutos: qué salió bien y qué harás mejor.",
        },
        PillarContent {
            pillar: Pillar::Leisure,
            label: "Ocio",
            tier_insights: [
                "El descanso no existe o llega con culpa; estás corriendo sin recuperación.",
                "Descansas a veces, pero rara vez por completo.",
                "Tienes un tiempo sano para descansar y disfrutar.",
                "El juego y el descanso son parte natural de tu vida.",
            ],
            leverage: "Reserva esta semana dos horas de ocio sin culpa, como si fuera una reunión.",
        },
        PillarContent {
            pillar: Pillar::Identity,
            label: "Identidad",
            tier_insights: [
                "Te definen los roles y las demandas; tu sentido de ti mismo está apagado.",
                "Sabes quién eres, pero ese saber se dobla bajo presión.",
                "Tu identidad es clara más allá de tus roles.",
                "Tienes un sentido fuerte y estable de quién eres.",
            ],
            leverage: "Escribe cinco frases que te describan sin mencionar el trabajo ni los roles familiares.",
        },
    ],
    archetypes: [
        ArchetypeContent {
            archetype: Archetype::Sovereign,
            label: "El Soberano",
            description: "Mente clara y equilibrio entre los pilares; tu tarea es cuidar lo que has construido.",
        },
        ArchetypeContent {
            archetype: Archetype::Architect,
            label: "El Arquitecto",
            description: "Ves con claridad, pero la base es desigual; construye el pilar más débil con la misma intención que dedicas a los demás.",
        },
        ArchetypeContent {
            archetype: Archetype::Warrior,
            label: "El Guerrero",
            description: "Fuerte pero estirado; tienes recursos, pero la presión los consume más rápido de lo que te recuperas.",
        },
        ArchetypeContent {
            archetype: Archetype::Survivor,
            label: "El Superviviente",
            description: "Bajo presión y con poca reserva; la recuperación va antes que cualquier nueva ambición.",
        },
        ArchetypeContent {
            archetype: Archetype::Seeker,
            label: "El Buscador",
            description: "En busca de dirección; las respuestas llegarán de pequeños experimentos, no de pensar más.",
        },
        ArchetypeContent {
            archetype: Archetype::Wanderer,
            label: "El Errante",
            description: "Alejándote de las personas o del progreso; la reconexión empieza con un paso deliberado.",
        },
    ],
    correlations: [
        CorrelationContent {
            correlation: CorrelationKey::WorkHealth,
            text: "El trabajo consume la energía que necesita tu salud; recuperar uno ayuda al otro.",
        },
        CorrelationContent {
            correlation: CorrelationKey::WorkLeisure,
            text: "Sin descanso, el trabajo ocupa todo tu tiempo; proteger el ocio también mejora tu trabajo.",
        },
        CorrelationContent {
            correlation: CorrelationKey::FinanceWork,
            text: "La presión financiera te mantiene en patrones de trabajo que te agotan.",
        },
        CorrelationContent {
            correlation: CorrelationKey::RelationshipsLeisure,
            text: "Poco tiempo libre deja poco espacio para las personas; el ocio compartido puede reparar ambos.",
        },
        CorrelationContent {
            correlation: CorrelationKey::IdentitySpirituality,
            text: "Sin espacio para la reflexión, tu sentido de ti mismo se apaga; la contemplación reconstruye la identidad.",
        },
        CorrelationContent {
            correlation: CorrelationKey::RelationshipsIdentity,
            text: "Cuando no tienes claro quién eres, la cercanía parece arriesgada; la honestidad fortalece ambas.",
        },
        CorrelationContent {
            correlation: CorrelationKey::HealthFinance,
            text: "La preocupación por el dinero y el desgaste físico se alimentan; pequeñas mejoras en uno ayudan al otro.",
        },
        CorrelationContent {
            correlation: CorrelationKey::BalancedBase,
            text: "Ningún pilar arrastra a los demás; tu base está lo bastante equilibrada para crecer.",
        },
    ],
    questions: [
        QuestionContent { id: 1, prompt: "Me siento inseguro sobre lo que realmente quiero de la vida." },
        QuestionContent { id: 2, prompt: "Tengo un sentido claro de propósito que guía mis días." },
        QuestionContent { id: 3, prompt: "Me cuesta decidir entre prioridades que compiten." },
        QuestionContent { id: 4, prompt: "Tengo más compromisos de los que puedo manejar." },
        QuestionContent { id: 5, prompt: "Termino el día agotado mental y físicamente." },
        QuestionContent { id: 6, prompt: "Digo que sí a pedidos aunque quiera decir que no." },
        QuestionContent { id: 7, prompt: "Reacciono por impulso cuando las cosas no salen como quiero." },
        QuestionContent { id: 8, prompt: "Puedo hacer una pausa antes de responder a algo estresante." },
        QuestionContent { id: 9, prompt: "Me preocupo por el futuro más de lo que actúo sobre él." },
        QuestionContent { id: 10, prompt: "Me siento distante de las personas más cercanas." },
        QuestionContent { id: 11, prompt: "Siento que mi rutina dejó de hacerme avanzar." },
        QuestionContent { id: 12, prompt: "Pospongo cambios importantes que sé que necesito hacer." },
        QuestionContent { id: 13, prompt: "Cuido mi cuerpo con sueño, movimiento y alimentación." },
        QuestionContent { id: 14, prompt: "Mi trabajo tiene sentido y es sostenible." },
        QuestionContent { id: 15, prompt: "Siento que tengo el control de mis finanzas." },
        QuestionContent { id: 16, prompt: "Tengo tiempo para descansar y disfrutar sin culpa." },
        QuestionContent { id: 17, prompt: "Practico la reflexión, la fe o la contemplación con regularidad." },
        QuestionContent { id: 18, prompt: "Sé quién soy más allá de mis roles y títulos." },
        QuestionContent { id: 19, prompt: "Mis acciones diarias coinciden con mis valores." },
        QuestionContent { id: 20, prompt: "Tomo decisiones desde un lugar tranquilo y enfocado." },
        QuestionContent { id: 21, prompt: "Tengo relaciones en las que puedo ser plenamente yo." },
    ],
    ui: UiCopy {
        likert_scale: ["Nunca", "Rara vez", "A veces", "A menudo", "Siempre"],
        locked_teaser: "Desbloquea el informe completo para ver tu plan de acción, la lección estoica y los análisis por pilar.",
        enrichment_not_requested: "Tu plan personalizado aún no se ha generado.",
        enrichment_pending: "Tu plan personalizado todavía se está preparando. Vuelve en un momento.",
        enrichment_unavailable: "Tu plan personalizado no está disponible por ahora. El resto de tu informe está completo.",
    },
};
