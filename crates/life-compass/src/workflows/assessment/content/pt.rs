use super::super::domain::{Archetype, CorrelationKey, DiagnosticState, Locale, Pillar};
use super::{
    ArchetypeContent, CorrelationContent, LocaleContent, PillarContent, QuestionContent,
    StateContent, UiCopy,
};

pub(super) static CONTENT: LocaleContent = LocaleContent {
    locale: Locale::Pt,
    states: [
        StateContent {
            state: DiagnosticState::Confusion,
            label: "Confusão",
            one_liner: "Você está em movimento, mas sem mapa.",
            meaning: "Suas respostas mostram prioridades em disputa e nenhuma bússola interna \
                clara. A energia vai para decidir o que importa em vez de agir.",
            characteristics: &[
                "Dificuldade para escolher entre opções de peso parecido",
                "Começar muitas coisas e terminar poucas",
                "Sensação de que o tempo passa sem direção",
            ],
            primary_risk: "Gastar anos nas prioridades dos outros porque as suas nunca foram nomeadas.",
            recommended_focus: &[
                "Nomear as três coisas que mais importam nesta fase",
                "Fechar uma pendência aberta por dia",
            ],
            next_step: "Escreva uma página descrevendo como seria um bom ano para você.",
            immediate_win: "Conclua ou apague cinco tarefas abertas que já não servem para nada.",
            no_to_say: "Diga não a novos compromissos até suas três prioridades estarem escritas.",
            mindset_shift: "De \"o que eu deveria fazer?\" para \"o que eu me recuso a negligenciar?\"",
            stoic_lesson: "A direção nasce de saber o que está sob seu controle e se comprometer com isso.",
            stoic_quote: "Nenhum vento é favorável para quem não sabe a que porto se dirige.",
            stoic_author: "Sêneca",
        },
        StateContent {
            state: DiagnosticState::Overload,
            label: "Sobrecarga",
            one_liner: "Você está carregando mais do que uma pessoa deveria.",
            meaning: "A demanda supera sua capacidade. O problema não é disciplina, é volume: \
                compromissos demais e recuperação de menos.",
            characteristics: &[
                "Cansaço crônico no fim do dia",
                "Aceitar pedidos que depois geram ressentimento",
                "Descanso que parece dívida em vez de direito",
            ],
            primary_risk: "Um esgotamento que impõe o descanso que você se recusa a tirar por vontade própria.",
            recommended_focus: &[
                "Cortar compromissos antes de criar novas rotinas",
                "Proteger um bloco de recuperação todos os dias",
            ],
            next_step: "Liste todos os compromissos ativos e marque os dois que vai renegociar nesta semana.",
            immediate_win: "Cancele ou delegue uma reunião ou tarefa marcada para amanhã.",
            no_to_say: "Diga não ao próximo pedido que chegar quando você já estiver no limite.",
            mindset_shift: "De \"como eu encaixo tudo?\" para \"o que merece minha energia limitada?\"",
            stoic_lesson: "Fazer menos, e apenas o essencial, é o caminho para a tranquilidade.",
            stoic_quote: "Se buscas tranquilidade, faze menos.",
            stoic_author: "Marco Aurélio",
        },
        StateContent {
            state: DiagnosticState::Reactivity,
            label: "Reatividade",
            one_liner: "Os acontecimentos estão conduzindo você antes que você conduza a si mesmo.",
            meaning: "O espaço entre estímulo e resposta está curto. Frustração e urgência guiam \
                decisões que você depois revisita.",
            characteristics: &[
                "Irritação rápida quando os planos mudam",
                "Respostas enviadas no calor do momento",
                "Arrependimento depois de conversas difíceis",
            ],
            primary_risk: "Prejudicar relações e decisões com respostas que você não escolheria com calma.",
            recommended_focus: &[
                "Criar uma pausa antes de cada resposta importante",
                "Perceber o primeiro sinal físico de agitação",
            ],
            next_step: "Adote a regra dos dez minutos antes de responder a qualquer coisa que o incomode.",
            immediate_win: "Respire devagar três vezes antes da próxima resposta que escrever hoje.",
            no_to_say: "Diga não a responder provocações no mesmo dia em que as recebe.",
            mindset_shift: "De \"eles me fizeram reagir\" para \"eu escolho minha resposta\".",
            stoic_lesson: "Não são os acontecimentos que nos perturbam, mas nossos julgamentos sobre eles.",
            stoic_quote: "Os homens não se perturbam pelas coisas, mas pelas opiniões que têm delas.",
            stoic_author: "Epicteto",
        },
        StateContent {
            state: DiagnosticState::Uncertainty,
            label: "Incerteza",
            one_liner: "O futuro está ocupando o espaço onde deveria estar a ação.",
            meaning: "A preocupação com o que pode acontecer, muitas vezes dinheiro ou \
                estabilidade, pesa mais do que os passos que você pode dar agora.",
            characteristics: &[
                "Ensaiar cenários ruins na cabeça",
                "Adiar decisões até se sentir seguro",
                "Insegurança financeira influenciando escolhas do dia a dia",
            ],
            primary_risk: "Uma paralisia que transforma riscos imaginados em estagnação real.",
            recommended_focus: &[
                "Separar o que você controla do que não controla",
                "Transformar cada preocupação em uma ação concreta",
            ],
            next_step: "Anote suas três maiores preocupações e uma ação sob seu controle para cada uma.",
            immediate_win: "Confira um número que você vem evitando, como um saldo ou uma conta.",
            no_to_say: "Diga não a decisões tomadas só para calar a ansiedade.",
            mindset_shift: "De \"e se der errado?\" para \"o que posso fazer hoje?\"",
            stoic_lesson: "A maior parte do sofrimento vive na antecipação; o presente costuma ser suportável.",
            stoic_quote: "Sofremos mais na imaginação do que na realidade.",
            stoic_author: "Sêneca",
        },
        StateContent {
            state: DiagnosticState::Disconnection,
            label: "Desconexão",
            one_liner: "Você está presente no corpo, mas distante das pessoas ao seu redor.",
            meaning: "Suas respostas apontam vínculos frágeis e poucos espaços onde você pode ser \
                plenamente você.",
            characteristics: &[
                "Conversas que ficam na superfície",
                "Sentir-se só mesmo acompanhado",
                "Adiar o contato com pessoas importantes",
            ],
            primary_risk: "Um isolamento que corrói em silêncio a saúde, o sentido e a resiliência.",
            recommended_focus: &[
                "Investir de forma deliberada em uma relação por semana",
                "Ser totalmente honesto em pelo menos uma conversa por dia",
            ],
            next_step: "Marque uma ligação ou encontro com alguém de quem sente falta nos próximos sete dias.",
            immediate_win: "Envie hoje uma mensagem sincera de gratidão a uma pessoa.",
            no_to_say: "Diga não às telas durante uma refeição compartilhada nesta semana.",
            mindset_shift: "De \"ninguém me procura\" para \"eu dou o primeiro passo\".",
            stoic_lesson: "Fomos feitos para cooperar; o isolamento contraria nossa natureza.",
            stoic_quote: "Nascemos para a cooperação, como os pés, como as mãos, como as pálpebras.",
            stoic_author: "Marco Aurélio",
        },
        StateContent {
            state: DiagnosticState::Stagnation,
            label: "Estagnação",
            one_liner: "A rotina continua, mas você não avança mais.",
            meaning: "Os dias se repetem sem crescimento. Você sabe o que precisa mudar, mas \
                continua adiando.",
            characteristics: &[
                "Sensação de viver no piloto automático",
                "Mudanças importantes sempre deixadas para depois",
                "Pouco entusiasmo com o futuro",
            ],
            primary_risk: "Acordar daqui a alguns anos no mesmo lugar, com menos energia para mudar.",
            recommended_focus: &[
                "Escolher uma mudança e começá-la na sua menor forma",
                "Acompanhar o progresso por semana em vez de buscar perfeição",
            ],
            next_step: "Escolha a mudança que você mais adia e defina um primeiro passo de quinze minutos.",
            immediate_win: "Dê esse passo de quinze minutos hoje, antes de qualquer outra coisa.",
            no_to_say: "Diga não a esperar o momento perfeito para começar.",
            mindset_shift: "De \"algum dia\" para \"hoje, de um jeito pequeno\".",
            stoic_lesson: "A vida é longa o bastante se bem usada; adiar é seu maior desperdício.",
            stoic_quote: "Enquanto adiamos, a vida passa.",
            stoic_author: "Sêneca",
        },
        StateContent {
            state: DiagnosticState::Clarity,
            label: "Clareza",
            one_liner: "Você enxerga o caminho; agora ele precisa de constância.",
            meaning: "Sua direção está clara e as decisões vêm de um lugar de calma. O trabalho \
                agora é transformar clareza em ação constante em todos os pilares.",
            characteristics: &[
                "Decisões tomadas sem longa hesitação",
                "Um senso de propósito definido",
                "Calma diante da pressão comum",
            ],
            primary_risk: "Confundir saber o que fazer com fazer, e deixar os pilares mais fracos à deriva.",
            recommended_focus: &[
                "Converter clareza em compromissos semanais",
                "Elevar o pilar mais fraco ao nível dos demais",
            ],
            next_step: "Defina um compromisso mensurável para o seu pilar mais fraco neste mês.",
            immediate_win: "Reserve trinta minutos na agenda de amanhã para esse pilar.",
            no_to_say: "Diga não a oportunidades que não combinam com sua direção, por mais atraentes que sejam.",
            mindset_shift: "De \"sei para onde vou\" para \"caminho até lá todos os dias\".",
            stoic_lesson: "Clareza é ponto de partida; o caráter se constrói com ação repetida.",
            stoic_quote: "Primeiro diga a si mesmo o que você quer ser; depois faça o que tem de fazer.",
            stoic_author: "Epicteto",
        },
        StateContent {
            state: DiagnosticState::Alignment,
            label: "Alinhamento",
            one_liner: "O que você valoriza e o que você faz caminham juntos.",
            meaning: "Suas ações correspondem aos seus valores. É uma posição forte, e a tarefa é \
                protegê-la e compartilhá-la.",
            characteristics: &[
                "Pouca distância entre intenção e comportamento",
                "Energia que vem de atividades com sentido",
                "Um senso de identidade estável",
            ],
            primary_risk: "Acomodação: achar que o alinhamento é permanente e descuidar dos hábitos que o construíram.",
            recommended_focus: &[
                "Proteger as rotinas que sustentam você",
                "Apoiar alguém que percorre um caminho parecido",
            ],
            next_step: "Anote os três hábitos mais responsáveis pelo seu equilíbrio atual.",
            immediate_win: "Registre uma escolha desta semana que manteve você alinhado e por que ela importou.",
            no_to_say: "Diga não a compromissos que trocariam seus valores por aprovação.",
            mindset_shift: "De \"eu cheguei\" para \"eu continuo escolhendo isto\".",
            stoic_lesson: "A virtude é uma prática, não um troféu; ela se mantém ao ser exercida.",
            stoic_quote: "Não perca mais tempo discutindo como deve ser um homem bom. Seja um.",
            stoic_author: "Marco Aurélio",
        },
    ],
    pillars: [
        PillarContent {
            pillar: Pillar::Health,
            label: "Saúde",
            tier_insights: [
                "Seu corpo está sinalizando esgotamento; sono, movimento e alimentação vêm antes de tudo.",
                "Sua saúde se sustenta, mas com pouca reserva; pequenos deslizes aparecerão rápido.",
                "Sua base de saúde é sólida; a constância vai mantê-la assim.",
                "Seu corpo é um recurso de verdade; use essa energia com intenção.",
            ],
            leverage: "Comece pelo sono: um horário fixo para deitar eleva todos os outros pilares.",
        },
        PillarContent {
            pillar: Pillar::Work,
            label: "Trabalho",
            tier_insights: [
                "O trabalho drena mais do que devolve e está tomando o espaço do resto da sua vida.",
                "O trabalho só é sustentável nas semanas boas; faltam sentido ou limites.",
                "O trabalho tem sentido e está em grande parte sob controle.",
                "O trabalho energiza você e reflete quem você é.",
            ],
            leverage: "Defina um horário fixo para encerrar o expediente e mantenha-o por cinco dias seguidos.",
        },
        PillarContent {
            pillar: Pillar::Relationships,
            label: "Relacionamentos",
            tier_insights: [
                "Seus vínculos estão frágeis; faltam lugares onde você possa ser você mesmo.",
                "Existe conexão, mas ela é irregular ou fica na superfície.",
                "Você tem relações confiáveis que o apoiam.",
                "Suas relações são profundas e uma fonte de força.",
            ],
            leverage: "Marque uma conversa sem pressa por semana com alguém importante.",
        },
        PillarContent {
            pillar: Pillar::Finance,
            label: "Finanças",
            tier_insights: [
                "O dinheiro é uma fonte constante de preocupação e guia muitas decisões.",
                "Suas finanças funcionam, mas um imprevisto pode desequilibrá-las.",
                "Você sente que controla seu dinheiro na maior parte do tempo.",
                "Suas finanças dão a você liberdade e opções.",
            ],
            leverage: "Revise todas as despesas recorrentes e cancele aquela que você não escolheria de novo.",
        },
        PillarContent {
            pillar: Pillar::Spirituality,
            label: "Espiritualidade",
            tier_insights: [
                "Quase não há espaço para reflexão, sentido ou contemplação.",
                "Momentos de reflexão existem, mas são raros e facilmente deslocados.",
                "Você tem uma prática regular que o ancora.",
                "Reflexão e sentido fazem parte dos seus dias.",
            ],
            leverage: "Comece uma revisão noturna de cinco minutos: o que foi bem e o que fará melhor.",
        },
        PillarContent {
            pillar: Pillar::Leisure,
            label: "Lazer",
            tier_insights: [
                "O descanso está ausente ou vem com culpa; você está correndo sem recuperação.",
                "Você descansa às vezes, mas raramente por inteiro.",
                "Você tem tempo saudável para descanso e diversão.",
                "Diversão e descanso fazem parte natural da sua vida.",
            ],
            leverage: "Reserve nesta semana duas horas de lazer sem culpa, como se fosse uma reunião.",
        },
        PillarContent {
            pillar: Pillar::Identity,
            label: "Identidade",
            tier_insights: [
                "Você é definido por papéis e demandas; seu senso de si está apagado.",
                "Você sabe quem é, mas esse saber se dobra sob pressão.",
                "Sua identidade é clara para além dos seus papéis.",
                "Você tem um senso forte e estável de quem é.",
            ],
            leverage: "Escreva cinco frases que descrevam você sem mencionar trabalho ou papéis familiares.",
        },
    ],
    archetypes: [
        ArchetypeContent {
            archetype: Archetype::Sovereign,
            label: "O Soberano",
            description: "Mente clara e equilíbrio entre os pilares; sua tarefa é zelar pelo que construiu.",
        },
        ArchetypeContent {
            archetype: Archetype::Architect,
            label: "O Arquiteto",
            description: "Você enxerga com clareza, mas a base é desigual; construa o pilar mais fraco com a mesma intenção que dedica aos outros.",
        },
        ArchetypeContent {
            archetype: Archetype::Warrior,
            label: "O Guerreiro",
            description: "Forte, porém esticado; você tem recursos, mas a pressão os consome mais rápido do que você se recupera.",
        },
        ArchetypeContent {
            archetype: Archetype::Survivor,
            label: "O Sobrevivente",
            description: "Sob pressão e com pouca reserva; a recuperação vem antes de qualquer nova ambição.",
        },
        ArchetypeContent {
            archetype: Archetype::Seeker,
            label: "O Buscador",
            description: "Em busca de direção; as respostas virão de pequenos experimentos, não de mais reflexão.",
        },
        ArchetypeContent {
            archetype: Archetype::Wanderer,
            label: "O Andarilho",
            description: "Afastando-se das pessoas ou do progresso; a reconexão começa com um passo deliberado.",
        },
    ],
    correlations: [
        CorrelationContent {
            correlation: CorrelationKey::WorkHealth,
            text: "O trabalho está consumindo a energia de que sua saúde precisa; recuperar um ajuda o outro.",
        },
        CorrelationContent {
            correlation: CorrelationKey::WorkLeisure,
            text: "Sem descanso, o trabalho ocupa todo o seu tempo; proteger o lazer também melhora o trabalho.",
        },
        CorrelationContent {
            correlation: CorrelationKey::FinanceWork,
            text: "A pressão financeira mantém você em padrões de trabalho que o esgotam.",
        },
        CorrelationContent {
            correlation: CorrelationKey::RelationshipsLeisure,
            text: "Pouco tempo livre deixa pouco espaço para as pessoas; o lazer compartilhado pode reparar os dois.",
        },
        CorrelationContent {
            correlation: CorrelationKey::IdentitySpirituality,
            text: "Sem espaço para reflexão, seu senso de si se apaga; a contemplação reconstrói a identidade.",
        },
        CorrelationContent {
            correlation: CorrelationKey::RelationshipsIdentity,
            text: "Quando você não sabe bem quem é, a proximidade parece arriscada; a honestidade fortalece os dois.",
        },
        CorrelationContent {
            correlation: CorrelationKey::HealthFinance,
            text: "Preocupação com dinheiro e desgaste físico se alimentam; pequenos ganhos em um ajudam o outro.",
        },
        CorrelationContent {
            correlation: CorrelationKey::BalancedBase,
            text: "Nenhum pilar está puxando os outros para baixo; sua base é equilibrada o bastante para crescer.",
        },
    ],
    questions: [
        QuestionContent { id: 1, prompt: "Sinto-me inseguro sobre o que realmente quero da vida." },
        QuestionContent { id: 2, prompt: "Tenho um senso claro de propósito guiando meus dias." },
        QuestionContent { id: 3, prompt: "Tenho dificuldade para decidir entre prioridades que competem." },
        QuestionContent { id: 4, prompt: "Tenho mais compromissos do que consigo dar conta." },
        QuestionContent { id: 5, prompt: "Termino o dia exausto mental e fisicamente." },
        QuestionContent { id: 6, prompt: "Digo sim a pedidos mesmo quando quero dizer não." },
        QuestionContent { id: 7, prompt: "Reajo por impulso quando as coisas não saem como quero." },
        QuestionContent { id: 8, prompt: "Consigo fazer uma pausa antes de responder a algo estressante." },
        QuestionContent { id: 9, prompt: "Preocupo-me com o futuro mais do que ajo sobre ele." },
        QuestionContent { id: 10, prompt: "Sinto-me distante das pessoas mais próximas." },
        QuestionContent { id: 11, prompt: "Sinto que minha rotina deixou de me fazer avançar." },
        QuestionContent { id: 12, prompt: "Adio mudanças importantes que sei que preciso fazer." },
        QuestionContent { id: 13, prompt: "Cuido do meu corpo com sono, movimento e alimentação." },
        QuestionContent { id: 14, prompt: "Meu trabalho tem sentido e é sustentável." },
        QuestionContent { id: 15, prompt: "Sinto que tenho controle das minhas finanças." },
        QuestionContent { id: 16, prompt: "Tenho tempo para descanso e diversão sem sentir culpa." },
        QuestionContent { id: 17, prompt: "Pratico reflexão, fé ou contemplação com regularidade." },
        QuestionContent { id: 18, prompt: "Sei quem sou além dos meus papéis e títulos." },
        QuestionContent { id: 19, prompt: "Minhas ações do dia a dia correspondem aos meus valores." },
        QuestionContent { id: 20, prompt: "Tomo decisões a partir de um lugar calmo e focado." },
        QuestionContent { id: 21, prompt: "Tenho relações em que posso ser plenamente eu mesmo." },
    ],
    ui: UiCopy {
        likert_scale: ["Nunca", "Raramente", "Às vezes", "Frequentemente", "Sempre"],
        locked_teaser: "Desbloqueie o relatório completo para ver seu plano de ação, a lição estoica e os insights por pilar.",
        enrichment_not_requested: "Seu plano personalizado ainda não foi gerado.",
        enrichment_pending: "Seu plano personalizado ainda está sendo preparado. Volte em instantes.",
        enrichment_unavailable: "Seu plano personalizado está temporariamente indisponível. O restante do relatório está completo.",
    },
};
